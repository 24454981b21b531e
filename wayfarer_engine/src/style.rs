//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides convenience methods for applying ANSI
//! styling via the `colored` crate. Implementations for `&str` and `String`
//! are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn room_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn npc_style(&self) -> ColoredString;
    fn speech_style(&self) -> ColoredString;
    fn exit_style(&self) -> ColoredString;
    fn exit_locked_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn denied_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn task_done_style(&self) -> ColoredString;
    fn victory_style(&self) -> ColoredString;
    fn defeat_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn room_style(&self) -> ColoredString {
        self.truecolor(222, 150, 40).bold()
    }
    fn description_style(&self) -> ColoredString {
        self.truecolor(160, 200, 235)
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(215, 195, 80)
    }
    fn npc_style(&self) -> ColoredString {
        self.truecolor(90, 190, 110).underline()
    }
    fn speech_style(&self) -> ColoredString {
        self.italic().truecolor(200, 220, 160)
    }
    fn exit_style(&self) -> ColoredString {
        self.truecolor(120, 205, 120)
    }
    fn exit_locked_style(&self) -> ColoredString {
        self.italic().truecolor(205, 70, 70)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(225, 60, 60)
    }
    fn denied_style(&self) -> ColoredString {
        self.italic().truecolor(225, 60, 60)
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn task_done_style(&self) -> ColoredString {
        self.truecolor(130, 130, 130).strikethrough()
    }
    fn victory_style(&self) -> ColoredString {
        self.bold().truecolor(80, 220, 100)
    }
    fn defeat_style(&self) -> ColoredString {
        self.bold().truecolor(220, 60, 60)
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(150, 150, 150)
    }
}

impl GameStyle for String {
    fn room_style(&self) -> ColoredString {
        self.as_str().room_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn npc_style(&self) -> ColoredString {
        self.as_str().npc_style()
    }
    fn speech_style(&self) -> ColoredString {
        self.as_str().speech_style()
    }
    fn exit_style(&self) -> ColoredString {
        self.as_str().exit_style()
    }
    fn exit_locked_style(&self) -> ColoredString {
        self.as_str().exit_locked_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn denied_style(&self) -> ColoredString {
        self.as_str().denied_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn task_done_style(&self) -> ColoredString {
        self.as_str().task_done_style()
    }
    fn victory_style(&self) -> ColoredString {
        self.as_str().victory_style()
    }
    fn defeat_style(&self) -> ColoredString {
        self.as_str().defeat_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_emit_ansi_when_forced() {
        colored::control::set_override(true);
        let styled = "hall".room_style().to_string();
        assert!(styled.contains('\u{1b}'));
        colored::control::unset_override();
    }

    #[test]
    fn string_impl_delegates_to_str() {
        colored::control::set_override(true);
        let owned = String::from("key");
        assert_eq!(owned.item_style().to_string(), "key".item_style().to_string());
        colored::control::unset_override();
    }
}
