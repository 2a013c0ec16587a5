//! Button to IR command mapping

use crate::types::{Button, IrCommand};

/// Static binding of every keymap button to the command it sends
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keymap {
    /// Indexed by [`Button::index`]
    commands: [IrCommand; Button::COUNT],
}

impl Keymap {
    /// Build a keymap from `(button, command)` pairs
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `const`) if a button is left
    /// without a binding.
    #[must_use]
    pub const fn new(bindings: [(Button, IrCommand); Button::COUNT]) -> Self {
        let mut commands = [bindings[0].1; Button::COUNT];
        let mut bound = [false; Button::COUNT];
        let mut i = 0;
        while i < Button::COUNT {
            let (button, command) = bindings[i];
            commands[button.index()] = command;
            bound[button.index()] = true;
            i += 1;
        }
        let mut i = 0;
        while i < Button::COUNT {
            assert!(bound[i], "every button needs a binding");
            i += 1;
        }
        Self { commands }
    }

    /// Command bound to `button`
    #[must_use]
    pub const fn command(&self, button: Button) -> IrCommand {
        self.commands[button.index()]
    }

    /// All bindings in polling order
    pub fn iter(&self) -> impl Iterator<Item = (Button, IrCommand)> + '_ {
        Button::ALL.into_iter().map(|b| (b, self.command(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::sharp;

    #[test]
    fn bindings_are_reordered_by_button() {
        let keymap = Keymap::new([
            (Button::Sw5, sharp::MENU),
            (Button::Sw4, sharp::VOLUME_DOWN),
            (Button::Sw3, sharp::VOLUME_UP),
            (Button::Sw2, sharp::POWER),
        ]);
        assert_eq!(keymap.command(Button::Sw2), sharp::POWER);
        assert_eq!(keymap.command(Button::Sw5), sharp::MENU);
    }

    #[test]
    #[should_panic(expected = "every button needs a binding")]
    fn duplicate_button_leaves_a_hole() {
        let _ = Keymap::new([
            (Button::Sw2, sharp::POWER),
            (Button::Sw2, sharp::POWER),
            (Button::Sw4, sharp::VOLUME_DOWN),
            (Button::Sw5, sharp::MENU),
        ]);
    }
}
