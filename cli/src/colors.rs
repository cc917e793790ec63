use colored::*;

pub struct ColorScheme {
    enabled: bool,
}

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self {
            enabled: use_colors,
        }
    }

    /// Uncoloured output for text written to files. Leaves the process-wide
    /// colour setting untouched.
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> ColoredString {
        if self.enabled {
            style(text)
        } else {
            text.normal()
        }
    }

    pub fn actor_name(&self, text: &str) -> ColoredString {
        self.paint(text, |text| text.yellow())
    }

    pub fn movie_title(&self, text: &str) -> ColoredString {
        self.paint(text, |text| text.cyan())
    }

    pub fn connector(&self, text: &str) -> ColoredString {
        self.paint(text, |text| text.blue())
    }

    pub fn success(&self, text: &str) -> ColoredString {
        self.paint(text, |text| text.green())
    }

    pub fn error(&self, text: &str) -> ColoredString {
        self.paint(text, |text| text.red())
    }

    pub fn number(&self, text: &str) -> ColoredString {
        self.paint(text, |text| text.green())
    }

    pub fn heading(&self, text: &str) -> ColoredString {
        self.paint(text, |text| text.bold())
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        self.paint(text, |text| text.blue())
    }
}
