use crate::constants::{KEY_COUNT, PROGRAM_START, REGISTER_COUNT, STACK_BASE};
use crate::error::Chip8Error;
use crate::frame_buffer::{FrameBuffer, Mode, Screen};
use crate::instruction::Instruction;
use crate::memory::Memory;
use crate::rom::Rom;

/// Where the interpreter is in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Reset and waiting for the first step.
    Ready,
    Running,
    /// Suspended by `FX0A` until a key is pressed; the key is written to `register`.
    AwaitingKey { register: u8 },
    /// Stopped by `00FD`, a quit request or a fatal error. Steps do nothing.
    Halted,
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - 4096 bytes of `memory`, including the fonts and the call stack
///  - 16 8-bit registers `v`; VF doubles as the carry, borrow and collision flag
///  - the 16-bit index register `i`, program counter `pc` and stack pointer `sp`
///  - the delay and sound timers
///  - the display `mode` and which keys are held down
///
/// The `screen` it draws on is handed to it on construction and can be read back for rendering.
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - stepping the CPU and ticking its timers
/// - halting when the outside world wants to quit
pub struct Chip8<S: Screen = FrameBuffer> {
    pub(crate) memory: Memory,
    pub(crate) v: [u8; REGISTER_COUNT],
    pub(crate) i: u16,
    pub(crate) pc: u16,
    pub(crate) sp: u16,
    pub(crate) delay_timer: u8,
    pub(crate) sound_timer: u8,
    pub(crate) mode: Mode,
    pub(crate) pressed_keys: [bool; KEY_COUNT],
    pub(crate) state: RunState,
    pub(crate) draw_flag: bool,
    pub(crate) screen: S,
}

impl<S: Screen> Chip8<S> {
    /// Creates a reset interpreter drawing on `screen`.
    pub fn new(screen: S) -> Self {
        let mut chip8 = Chip8 {
            memory: Memory::new(),
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
            sp: STACK_BASE,
            delay_timer: 0,
            sound_timer: 0,
            mode: Mode::Normal,
            pressed_keys: [false; KEY_COUNT],
            state: RunState::Ready,
            draw_flag: false,
            screen,
        };
        chip8.reset();
        chip8
    }

    /// Returns the machine to its power-on state.
    /// - memory is wiped and the fonts reinstalled
    /// - registers, timers and keys are zeroed
    /// - `pc` points at `PROGRAM_START` and `sp` at `STACK_BASE`
    /// - the screen is put back into normal mode, which clears it
    pub fn reset(&mut self) {
        self.memory = Memory::new();
        self.v = [0; REGISTER_COUNT];
        self.i = 0;
        self.pc = PROGRAM_START;
        self.sp = STACK_BASE;
        self.delay_timer = 0;
        self.sound_timer = 0;
        self.pressed_keys = [false; KEY_COUNT];
        self.mode = Mode::Normal;
        self.screen.set_mode(Mode::Normal);
        self.draw_flag = true;
        self.state = RunState::Ready;
        log::debug!("reset");
    }

    /// Loads a rom at `PROGRAM_START`.
    pub fn load_rom(&mut self, rom: &Rom) -> Result<(), Chip8Error> {
        self.load_rom_at(rom, PROGRAM_START)
    }

    /// Copies program bytes into memory starting at `address`.
    ///
    /// Nothing is written if the bytes would run past the end of memory.
    pub fn load_rom_at(&mut self, code: &[u8], address: u16) -> Result<(), Chip8Error> {
        self.memory.load(address as usize, code)?;
        log::debug!("loaded {} bytes at {:#05X}", code.len(), address);
        Ok(())
    }

    /// Executes a single instruction.
    /// - does nothing while halted or awaiting a key
    /// - otherwise fetches the opcode at `pc`, advances `pc` past it, decodes and executes it
    ///
    /// Any error halts the interpreter before it is returned.
    pub fn step(&mut self) -> Result<RunState, Chip8Error> {
        match self.state {
            RunState::Halted | RunState::AwaitingKey { .. } => return Ok(self.state),
            RunState::Ready | RunState::Running => self.state = RunState::Running,
        }

        if let Err(e) = self.cycle() {
            log::error!("halting at {:#05X}: {}", self.pc, e);
            self.state = RunState::Halted;
            return Err(e);
        }
        Ok(self.state)
    }

    fn cycle(&mut self) -> Result<(), Chip8Error> {
        let address = self.pc;
        let op = self.fetch()?;
        let instruction = Instruction::decode(op)?;
        log::trace!(
            "{:04X} {:04X} {:<16} v{:02X?} i{:04X} sp{:04X}",
            address,
            op,
            instruction.to_string(),
            self.v,
            self.i,
            self.sp
        );
        self.execute(instruction)
    }

    /// Gets the opcode pointed at by `pc` and moves `pc` to the next instruction.
    fn fetch(&mut self) -> Result<u16, Chip8Error> {
        let op = self.memory.read_opcode(self.pc as usize)?;
        self.pc = self.pc.wrapping_add(2);
        Ok(op)
    }

    /// Runs a decoded instruction against the current state; `pc` already points past it.
    pub(crate) fn execute(&mut self, instruction: Instruction) -> Result<(), Chip8Error> {
        use Instruction::*;

        match instruction {
            Cls => self.clr(),
            Ret => self.rts()?,
            ScrollUp(n) => self.scu(n),
            ScrollDown(n) => self.scd(n),
            ScrollRight => self.scr(),
            ScrollLeft => self.scl(),
            Exit => self.halt(),
            LowRes => self.set_mode(Mode::Normal),
            HighRes => self.set_mode(Mode::Extended),
            Jump(addr) => self.jump(addr),
            Call(addr) => self.call(addr)?,
            SkipEqByte { x, kk } => self.ske(x, kk),
            SkipNeByte { x, kk } => self.skne(x, kk),
            SkipEqReg { x, y } => self.skre(x, y),
            LoadByte { x, kk } => self.load(x, kk),
            AddByte { x, kk } => self.add(x, kk),
            Move { x, y } => self.mv(x, y),
            Or { x, y } => self.or(x, y),
            And { x, y } => self.and(x, y),
            Xor { x, y } => self.xor(x, y),
            AddReg { x, y } => self.addr(x, y),
            Sub { x, y } => self.sub(x, y),
            ShiftRight { x } => self.shr(x),
            SubN { x, y } => self.subn(x, y),
            ShiftLeft { x } => self.shl(x),
            SkipNeReg { x, y } => self.skrne(x, y),
            LoadIndex(addr) => self.loadi(addr),
            JumpOffset(addr) => self.jumpi(addr),
            Random { x, kk } => self.rand(x, kk),
            Draw { x, y, n } => self.draw(x, y, n)?,
            SkipKeyDown { x } => self.skpr(x),
            SkipKeyUp { x } => self.skup(x),
            LoadDelay { x } => self.moved(x),
            WaitKey { x } => self.keyd(x),
            SetDelay { x } => self.loads(x),
            SetSound { x } => self.ld(x),
            AddIndex { x } => self.addi(x),
            LoadFont { x } => self.ldspr(x),
            LoadBigFont { x } => self.ldhspr(x),
            StoreBcd { x } => self.bcd(x)?,
            StoreRegisters { x } => self.stor(x)?,
            LoadRegisters { x } => self.read(x)?,
        }
        Ok(())
    }

    /// Decrements both timers by one unless they are already 0.
    pub fn decrement_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }

    /// Stops execution; later steps do nothing until a reset.
    pub fn halt(&mut self) {
        if self.state != RunState::Halted {
            log::info!("halted at {:#05X}", self.pc);
        }
        self.state = RunState::Halted;
    }

    /// Set the pressed status of key, completing an `FX0A` wait if there is one.
    ///
    /// # Arguments
    /// * `key` the logical key 0x0..=0xF; anything else is ignored
    pub fn key_press(&mut self, key: u8) {
        let Some(pressed) = self.pressed_keys.get_mut(key as usize) else {
            log::warn!("ignoring press of unmapped key {:#04X}", key);
            return;
        };
        *pressed = true;
        if let RunState::AwaitingKey { register } = self.state {
            log::debug!("key {:X} written to V{:X}", key, register);
            self.v[register as usize] = key;
            self.state = RunState::Running;
        }
    }

    /// Unset the pressed status of key
    pub fn key_release(&mut self, key: u8) {
        if let Some(pressed) = self.pressed_keys.get_mut(key as usize) {
            *pressed = false;
        }
    }

    /// Whether the logical key is held down. Keys above 0xF never are.
    pub fn is_key_down(&self, key: u8) -> bool {
        self.pressed_keys.get(key as usize).copied().unwrap_or(false)
    }

    /// Returns whether the screen changed since the last call, and clears the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.draw_flag, false)
    }

    /// Whether a tone should be playing.
    pub fn sound_active(&self) -> bool {
        self.sound_timer > 0
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn registers(&self) -> &[u8; REGISTER_COUNT] {
        &self.v
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn index(&self) -> u16 {
        self.i
    }

    pub fn sp(&self) -> u16 {
        self.sp
    }

    pub fn delay_timer(&self) -> u8 {
        self.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.sound_timer
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new(FrameBuffer::new())
    }
}
