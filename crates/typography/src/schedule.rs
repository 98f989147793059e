use html::Document;

use crate::error::TypographyError;
use crate::pass::{PassReport, Typographer};

#[derive(Debug)]
pub enum Scheduled {
    /// The document had finished loading; the pass already ran.
    Ran(PassReport),
    /// The pass runs once, when the document raises content-loaded.
    Deferred,
}

impl Typographer {
    /// Run once against `document`: right away when it is no longer loading,
    /// otherwise from its content-loaded signal.
    ///
    /// A deferred pass has no caller to report to, so its errors are logged.
    pub fn attach(self, document: &mut Document) -> Result<Scheduled, TypographyError> {
        if !document.is_loading() {
            return self.run(document.dom_mut()).map(Scheduled::Ran);
        }

        log::debug!(target: "typography", "document still loading; deferring pass");
        document.add_content_loaded_listener(move |dom| {
            if let Err(err) = self.run(dom) {
                log::error!(target: "typography", "deferred typography pass failed: {err}");
            }
        });
        Ok(Scheduled::Deferred)
    }
}
