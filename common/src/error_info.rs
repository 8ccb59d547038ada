use crate::models::ErrorQuery;

/// Used when the query doesn't carry an error code.

pub const DEFAULT_ERROR_CODE: &str = "404";

const GENERIC_DESCRIPTION: &str =
    "An unexpected error occurred. Please try again, or contact us if the problem persists.";

/// The error an error page is describing, rebuilt from the query string on
/// every render.
///
/// Codes are matched as exact strings, so `"404"` is known but `"404 "` and
/// `"0404"` fall through to the generic texts.

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ErrorContext {
    pub code: String,
    pub message: Option<String>,
}

impl Default for ErrorContext {
    fn default() -> Self {
        ErrorContext {
            code: DEFAULT_ERROR_CODE.to_owned(),
            message: None,
        }
    }
}

impl From<ErrorQuery> for ErrorContext {
    fn from(query: ErrorQuery) -> Self {
        ErrorContext {
            code: query.error_code
                .filter(|code| !code.is_empty())
                .unwrap_or_else(|| DEFAULT_ERROR_CODE.to_owned()),
            message: query.error_message.filter(|message| !message.is_empty()),
        }
    }
}

impl ErrorContext {
    pub fn title(&self) -> &'static str {
        match self.code.as_str() {
            "401" => "Unauthorized Access",
            "403" => "Forbidden Resource",
            "404" => "Page Not Found",
            "500" => "Internal Server Error",
            "502" => "Bad Gateway",
            "503" => "Service Unavailable",
            _ => "Something Went Wrong",
        }
    }

    /// Known codes always get their own sentence, even if the query carried a
    /// message. Only unknown codes show the message.

    pub fn description(&self) -> &str {
        match self.code.as_str() {
            "401" => "You need to be signed in to view this page. Please log in and try again.",
            "403" => "You don't have permission to access this resource.",
            "404" => "The page you're looking for doesn't exist or may have been moved.",
            "500" => "Something went wrong on our end. We're working to fix it, please try again later.",
            "502" => "We received an invalid response from an upstream server. Please try again in a moment.",
            "503" => "The service is temporarily unavailable for maintenance or due to high load. Please try again later.",
            _ => self.message.as_deref().unwrap_or(GENERIC_DESCRIPTION),
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self.code.as_str() {
            "401" | "403" | "404" => "Return to Home",
            _ => "Try Again",
        }
    }

    /// Where the primary action goes. This is home for every code, including
    /// the ones labelled "Try Again".

    pub fn action_target(&self) -> &'static str {
        "/"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(code: Option<&str>, message: Option<&str>) -> ErrorContext {
        ErrorContext::from(ErrorQuery {
            error_code: code.map(str::to_owned),
            error_message: message.map(str::to_owned),
        })
    }

    #[test]
    fn missing_code_defaults_to_404() {
        let ctx = context(None, None);
        assert_eq!(ctx, ErrorContext::default());
        assert_eq!(ctx.code, "404");
        assert_eq!(ctx.title(), "Page Not Found");

        assert_eq!(context(Some(""), Some("")).code, "404");
    }

    #[test]
    fn not_found_uses_static_text() {
        let ctx = context(Some("404"), None);
        assert_eq!(ctx.title(), "Page Not Found");
        assert_eq!(ctx.description(), "The page you're looking for doesn't exist or may have been moved.");
        assert_eq!(ctx.action_label(), "Return to Home");
    }

    #[test]
    fn known_code_ignores_message() {
        let ctx = context(Some("404"), Some("custom text"));
        assert_eq!(ctx.description(), "The page you're looking for doesn't exist or may have been moved.");

        let ctx = context(Some("503"), Some("custom text"));
        assert_ne!(ctx.description(), "custom text");
    }

    #[test]
    fn unknown_code_shows_message() {
        let ctx = context(Some("999"), Some("custom text"));
        assert_eq!(ctx.title(), "Something Went Wrong");
        assert_eq!(ctx.description(), "custom text");
        assert_eq!(ctx.action_label(), "Try Again");
    }

    #[test]
    fn unknown_code_without_message_is_generic() {
        let ctx = context(Some("418"), None);
        assert_eq!(ctx.description(), GENERIC_DESCRIPTION);

        let ctx = context(Some("418"), Some(""));
        assert_eq!(ctx.description(), GENERIC_DESCRIPTION);
    }

    #[test]
    fn titles_for_known_codes() {
        let titles = [
            ("401", "Unauthorized Access"),
            ("403", "Forbidden Resource"),
            ("404", "Page Not Found"),
            ("500", "Internal Server Error"),
            ("502", "Bad Gateway"),
            ("503", "Service Unavailable"),
        ];
        for (code, title) in titles {
            assert_eq!(context(Some(code), None).title(), title);
        }
    }

    #[test]
    fn codes_match_exactly() {
        assert_eq!(context(Some("0404"), None).title(), "Something Went Wrong");
        assert_eq!(context(Some(" 404"), None).title(), "Something Went Wrong");
    }

    #[test]
    fn server_errors_say_try_again_but_go_home() {
        let ctx = context(Some("500"), None);
        assert_eq!(ctx.action_label(), "Try Again");
        assert_eq!(ctx.action_target(), "/");

        for code in ["401", "403", "404"] {
            assert_eq!(context(Some(code), None).action_label(), "Return to Home");
        }
    }
}
