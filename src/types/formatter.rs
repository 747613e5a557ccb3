use strum::{Display, EnumString, IntoStaticStr};

/// Formatter used to render file contents for different environments.
///
/// See [`DocumentFile::formatted`](crate::DocumentFile::formatted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[non_exhaustive]
pub enum Formatter {
    #[strum(serialize = "terminal8")]
    Terminal8,
    #[strum(serialize = "terminal16")]
    Terminal16,
    #[strum(serialize = "terminal256")]
    Terminal256,
    #[strum(serialize = "terminal16m")]
    Terminal16m,
    #[strum(serialize = "html")]
    Html,
    #[strum(serialize = "html-standalone")]
    HtmlStandalone,
    #[strum(serialize = "svg")]
    Svg,
}

impl Formatter {
    /// The id string used by the Gobin server for this formatter.
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn ids_match_server_names() {
        assert_eq!(Formatter::Terminal16m.id(), "terminal16m");
        assert_eq!(Formatter::HtmlStandalone.id(), "html-standalone");
        assert_eq!(Formatter::from_str("SVG"), Ok(Formatter::Svg));
    }
}
