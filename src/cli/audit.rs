//! Audit command handler.

use color_eyre::Result;

use crate::config::Config;
use crate::services::OntologyService;

use super::App;

impl App {
    /// Print the ontology audit of the configured data as JSON.
    pub async fn run_audit(&self) -> Result<()> {
        let config = Config::load()?;
        let ctx = self.load_context(config).await?;

        let service: OntologyService = ctx.resolve();
        let audit = service.audit().await?;

        tracing::info!(
            unused_classes = audit.classes.unused.len(),
            undefined_classes = audit.classes.undefined.len(),
            unused_properties = audit.properties.unused.len(),
            undefined_properties = audit.properties.undefined.len(),
            "Audit complete"
        );

        println!("{}", serde_json::to_string_pretty(&audit)?);
        Ok(())
    }
}
