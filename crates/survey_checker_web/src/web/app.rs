use std::future::Future;

use survey_checker::bootstrap::AppModule;
use survey_checker::Result;
use tracing::info;

use super::dom::{self, js_err};

/// Set on `<body>` once the application has taken over the page.
pub(super) const APP_STATE_ATTR: &str = "data-survey-checker";

/// Entry point of the checker application.
pub struct CheckerApp;

impl AppModule for CheckerApp {
    fn init(self) -> impl Future<Output = Result<()>> + 'static {
        async move {
            let body: web_sys::HtmlElement = dom::select("body")?;
            body.set_attribute(APP_STATE_ATTR, "ready")
                .map_err(js_err)?;
            info!("survey checker ready");
            Ok(())
        }
    }
}
