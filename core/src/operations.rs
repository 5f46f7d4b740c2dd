use crate::chip8::{Chip8, RunState};
use crate::constants::{
    BIG_FONT_ADDR, BIG_FONT_GLYPH_BYTES, FONT_ADDR, FONT_GLYPH_BYTES, STACK_BASE, STACK_DEPTH,
};
use crate::error::Chip8Error;
use crate::frame_buffer::{Mode, Screen};

const VF: usize = 0xF;

// By the time any of these run `pc` already points at the next instruction,
// so "skip" means stepping over one more.
impl<S: Screen> Chip8<S> {
    /// clear
    pub(crate) fn clr(&mut self) {
        self.screen.clear();
        self.draw_flag = true;
    }

    /// PC = STACK.pop()
    pub(crate) fn rts(&mut self) -> Result<(), Chip8Error> {
        if self.sp <= STACK_BASE {
            return Err(Chip8Error::StackUnderflow);
        }
        self.sp -= 2;
        self.pc = self.memory.read_stack_word(self.sp as usize)?;
        Ok(())
    }

    /// scroll down n lines
    pub(crate) fn scd(&mut self, n: u8) {
        self.screen.scroll_down(n as usize);
        self.draw_flag = true;
    }

    /// scroll up n lines
    pub(crate) fn scu(&mut self, n: u8) {
        self.screen.scroll_up(n as usize);
        self.draw_flag = true;
    }

    /// scroll right 4 columns
    pub(crate) fn scr(&mut self) {
        self.screen.scroll_right();
        self.draw_flag = true;
    }

    /// scroll left 4 columns
    pub(crate) fn scl(&mut self) {
        self.screen.scroll_left();
        self.draw_flag = true;
    }

    /// Switches resolution; the screen is cleared even if the mode doesn't change.
    pub(crate) fn set_mode(&mut self, mode: Mode) {
        log::debug!("{:?} -> {:?} mode", self.mode, mode);
        self.mode = mode;
        self.screen.set_mode(mode);
        self.draw_flag = true;
    }

    /// PC = addr
    pub(crate) fn jump(&mut self, addr: u16) {
        self.pc = addr;
    }

    /// STACK.push(PC); PC = addr
    pub(crate) fn call(&mut self, addr: u16) -> Result<(), Chip8Error> {
        if self.sp >= STACK_BASE + 2 * STACK_DEPTH {
            return Err(Chip8Error::StackOverflow);
        }
        self.memory.write_stack_word(self.sp as usize, self.pc)?;
        self.sp += 2;
        self.pc = addr;
        Ok(())
    }

    fn skip_if(&mut self, condition: bool) {
        if condition {
            self.pc = self.pc.wrapping_add(2);
        }
    }

    /// if Vx == kk then pc += 2
    pub(crate) fn ske(&mut self, x: u8, kk: u8) {
        self.skip_if(self.v[x as usize] == kk);
    }

    /// if Vx != kk then pc += 2
    pub(crate) fn skne(&mut self, x: u8, kk: u8) {
        self.skip_if(self.v[x as usize] != kk);
    }

    /// if Vx == Vy then pc += 2
    pub(crate) fn skre(&mut self, x: u8, y: u8) {
        self.skip_if(self.v[x as usize] == self.v[y as usize]);
    }

    /// Vx = kk
    pub(crate) fn load(&mut self, x: u8, kk: u8) {
        self.v[x as usize] = kk;
    }

    /// Vx += kk
    /// Overflow wraps and VF is left alone
    pub(crate) fn add(&mut self, x: u8, kk: u8) {
        self.v[x as usize] = self.v[x as usize].wrapping_add(kk);
    }

    /// Vx = Vy
    pub(crate) fn mv(&mut self, x: u8, y: u8) {
        self.v[x as usize] = self.v[y as usize];
    }

    /// Vx |= Vy
    pub(crate) fn or(&mut self, x: u8, y: u8) {
        self.v[x as usize] |= self.v[y as usize];
    }

    /// Vx &= Vy
    pub(crate) fn and(&mut self, x: u8, y: u8) {
        self.v[x as usize] &= self.v[y as usize];
    }

    /// Vx ^= Vy
    pub(crate) fn xor(&mut self, x: u8, y: u8) {
        self.v[x as usize] ^= self.v[y as usize];
    }

    // The arithmetic below writes VF last so the flag survives when x is F.

    /// Vx += Vy; VF = overflow
    pub(crate) fn addr(&mut self, x: u8, y: u8) {
        let (res, over) = self.v[x as usize].overflowing_add(self.v[y as usize]);
        self.v[x as usize] = res;
        self.v[VF] = over as u8;
    }

    /// Vx -= Vy; VF = !underflow
    pub(crate) fn sub(&mut self, x: u8, y: u8) {
        let (res, under) = self.v[x as usize].overflowing_sub(self.v[y as usize]);
        self.v[x as usize] = res;
        self.v[VF] = !under as u8;
    }

    /// Vx >>= 1; VF = lsb
    pub(crate) fn shr(&mut self, x: u8) {
        let vx = self.v[x as usize];
        self.v[x as usize] = vx >> 1;
        self.v[VF] = vx & 0x1;
    }

    /// Vx = Vy - Vx; VF = !underflow
    pub(crate) fn subn(&mut self, x: u8, y: u8) {
        let (res, under) = self.v[y as usize].overflowing_sub(self.v[x as usize]);
        self.v[x as usize] = res;
        self.v[VF] = !under as u8;
    }

    /// Vx <<= 1; VF = msb
    pub(crate) fn shl(&mut self, x: u8) {
        let vx = self.v[x as usize];
        self.v[x as usize] = vx << 1;
        self.v[VF] = vx >> 7;
    }

    /// if Vx != Vy then pc += 2
    pub(crate) fn skrne(&mut self, x: u8, y: u8) {
        self.skip_if(self.v[x as usize] != self.v[y as usize]);
    }

    /// I = addr
    pub(crate) fn loadi(&mut self, addr: u16) {
        self.i = addr;
    }

    /// PC = V0 + addr
    pub(crate) fn jumpi(&mut self, addr: u16) {
        self.pc = u16::from(self.v[0x0]) + addr;
    }

    /// Vx = rand_byte & kk
    pub(crate) fn rand(&mut self, x: u8, kk: u8) {
        let rand_byte: u8 = rand::random();
        self.v[x as usize] = rand_byte & kk;
    }

    /// draw_sprite(x=Vx y=Vy rows=n)
    /// XORs a sprite from memory at I onto the screen at (Vx, Vy), wrapping at the edges.
    /// Rows are 1 byte wide in normal mode and 2 in extended mode.
    /// Sets VF if any pixel was erased
    pub(crate) fn draw(&mut self, x: u8, y: u8, n: u8) -> Result<(), Chip8Error> {
        let row_bytes = self.mode.sprite_bytes_per_row();
        let sprite = self.memory.slice(self.i as usize, n as usize * row_bytes)?;
        let (origin_x, origin_y) = (self.v[x as usize] as usize, self.v[y as usize] as usize);
        let (width, height) = (self.screen.width(), self.screen.height());

        // Reset the carry flag (used for collision detection)
        self.v[VF] = 0x0;

        for (row, line) in sprite.chunks_exact(row_bytes).enumerate() {
            let py = (origin_y + row) % height;
            for (byte, bits) in line.iter().enumerate() {
                for bit in 0..8 {
                    let px = (origin_x + byte * 8 + bit) % width;
                    let pixel = (bits >> (7 - bit)) & 0x1;
                    if self.screen.xor_pixel(px, py, pixel) == 0 && pixel == 0x1 {
                        self.v[VF] = 0x1;
                    }
                }
            }
        }

        self.draw_flag = true;
        Ok(())
    }

    /// if Vx.pressed then pc += 2
    pub(crate) fn skpr(&mut self, x: u8) {
        self.skip_if(self.is_key_down(self.v[x as usize]));
    }

    /// if !Vx.pressed then pc += 2
    pub(crate) fn skup(&mut self, x: u8) {
        self.skip_if(!self.is_key_down(self.v[x as usize]));
    }

    /// Vx = DT
    pub(crate) fn moved(&mut self, x: u8) {
        self.v[x as usize] = self.delay_timer;
    }

    /// await keypress for Vx
    pub(crate) fn keyd(&mut self, x: u8) {
        log::debug!("waiting for a key for V{:X}", x);
        self.state = RunState::AwaitingKey { register: x };
    }

    /// DT = Vx
    pub(crate) fn loads(&mut self, x: u8) {
        self.delay_timer = self.v[x as usize];
    }

    /// ST = Vx
    pub(crate) fn ld(&mut self, x: u8) {
        self.sound_timer = self.v[x as usize];
    }

    /// I += Vx
    pub(crate) fn addi(&mut self, x: u8) {
        self.i = self.i.wrapping_add(u16::from(self.v[x as usize]));
    }

    /// I = Vx * 5
    /// Set I to the memory address of the small font glyph for Vx
    pub(crate) fn ldspr(&mut self, x: u8) {
        self.i = FONT_ADDR + u16::from(self.v[x as usize]) * FONT_GLYPH_BYTES;
    }

    /// I = Vx * 10
    /// Set I to the memory address of the big font glyph for Vx
    pub(crate) fn ldhspr(&mut self, x: u8) {
        self.i = BIG_FONT_ADDR + u16::from(self.v[x as usize]) * BIG_FONT_GLYPH_BYTES;
    }

    /// mem[I..I+3] = bcd(Vx)
    /// Store BCD repr of Vx in memory starting at address i
    pub(crate) fn bcd(&mut self, x: u8) -> Result<(), Chip8Error> {
        let vx = self.v[x as usize];
        let bcd = [vx / 100, vx / 10 % 10, vx % 10];
        self.memory.load(self.i as usize, &bcd)
    }

    /// mem[I..=I+x] = V0..=Vx
    pub(crate) fn stor(&mut self, x: u8) -> Result<(), Chip8Error> {
        self.memory.load(self.i as usize, &self.v[..=x as usize])
    }

    /// V0..=Vx = mem[I..=I+x]
    pub(crate) fn read(&mut self, x: u8) -> Result<(), Chip8Error> {
        let bytes = self.memory.slice(self.i as usize, x as usize + 1)?;
        self.v[..=x as usize].copy_from_slice(bytes);
        Ok(())
    }
}
