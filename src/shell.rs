//! The outer shell: document frame plus the typefaces offered to the child tree.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Block,
};

use crate::config::{ShellSettings, TypefaceSettings};

/// Typefaces addressable by their variable name (e.g. `--font-poppins`).
#[derive(Debug, Clone)]
pub struct Theme {
    faces: Vec<TypefaceSettings>,
}

impl Theme {
    pub fn new(faces: Vec<TypefaceSettings>) -> Self {
        Self { faces }
    }

    /// Variable names in declaration order, space separated.
    pub fn class_name(&self) -> String {
        self.faces
            .iter()
            .map(|f| f.variable.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn typeface(&self, variable: &str) -> Option<&TypefaceSettings> {
        self.faces.iter().find(|f| f.variable == variable)
    }

    /// Terminal style for `variable` at `weight`.
    ///
    /// The requested weight snaps to the nearest one the face declares; heavy
    /// weights (>= 600) render bold and light ones (<= 300) dim. Unknown
    /// variables get the default style.
    pub fn font(&self, variable: &str, weight: u16) -> Style {
        let Some(face) = self.typeface(variable) else {
            return Style::default();
        };
        let weight = face
            .weights
            .iter()
            .copied()
            .min_by_key(|w| w.abs_diff(weight))
            .unwrap_or(weight);

        if weight >= 600 {
            Style::default().add_modifier(Modifier::BOLD)
        } else if weight <= 300 {
            Style::default().add_modifier(Modifier::DIM)
        } else {
            Style::default()
        }
    }
}

/// Root of the rendered tree. Stateless apart from its settings.
pub struct Shell {
    title: String,
    lang: String,
    theme: Theme,
}

impl Shell {
    pub fn new(settings: &ShellSettings) -> Self {
        Self {
            title: settings.title.clone(),
            lang: settings.lang.clone(),
            theme: Theme::new(vec![settings.heading.clone(), settings.body.clone()]),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    fn root_block(&self) -> Block<'static> {
        Block::bordered().title(format!(" {} · {} ", self.title, self.lang))
    }

    /// Draw the root frame and hand the inner area and theme to `child`.
    pub fn render<F>(&self, frame: &mut Frame, child: F)
    where
        F: FnOnce(&mut Frame, Rect, &Theme),
    {
        let area = frame.area();
        let block = self.root_block();
        let inner = block.inner(area);
        frame.render_widget(block, area);
        child(frame, inner, &self.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, widgets::Paragraph};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn theme_exposes_both_variables() {
        let shell = Shell::new(&ShellSettings::default());
        assert_eq!(shell.theme().class_name(), "--font-poppins --font-montserrat");
        assert_eq!(
            shell.theme().typeface("--font-montserrat").map(|f| f.family.as_str()),
            Some("Montserrat")
        );
        assert!(shell.theme().typeface("--font-nunito").is_none());
    }

    #[test]
    fn font_weight_maps_to_modifiers() {
        let theme = Shell::new(&ShellSettings::default()).theme().clone();
        assert!(theme
            .font("--font-poppins", 700)
            .add_modifier
            .contains(Modifier::BOLD));
        assert!(theme
            .font("--font-poppins", 200)
            .add_modifier
            .contains(Modifier::DIM));
        assert_eq!(theme.font("--font-poppins", 400), Style::default());
        assert_eq!(theme.font("--font-unknown", 900), Style::default());
    }

    #[test]
    fn font_weight_snaps_to_declared_weights() {
        let mut settings = ShellSettings::default();
        settings.heading.weights = vec![400];
        let shell = Shell::new(&settings);
        assert_eq!(shell.theme().font("--font-poppins", 900), Style::default());
    }

    #[test]
    fn render_draws_frame_and_children() {
        let shell = Shell::new(&ShellSettings::default());
        let mut terminal = Terminal::new(TestBackend::new(30, 5)).unwrap();
        terminal
            .draw(|f| {
                shell.render(f, |f, area, theme| {
                    assert_eq!(theme.class_name(), "--font-poppins --font-montserrat");
                    f.render_widget(Paragraph::new("child here"), area);
                })
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("tunebox · en"));
        assert!(text.contains("child here"));
    }
}
