// scancode values match SDL2's USB-HID based numbering

pub type Scancode = usize;

pub const SCANCODE_A: Scancode = 4;
pub const SCANCODE_D: Scancode = 7;
pub const SCANCODE_S: Scancode = 22;
pub const SCANCODE_W: Scancode = 26;

#[derive(Debug, Clone, Copy)]
pub struct InputSnapshot<'a> {
    scancodes: &'a [u8],
}

impl<'a> InputSnapshot<'a> {
    pub fn new(scancodes: &'a [u8]) -> Self {
        Self { scancodes }
    }

    // scancodes outside the snapshot's range read as "not held" rather than
    // panicking, since a host may only scan the keys it cares about
    pub fn is_held(&self, scancode: Scancode) -> bool {
        self.scancodes.get(scancode).is_some_and(|&v| v != 0)
    }
}
