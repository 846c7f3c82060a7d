use crate::areas::refresher::{RefreshOutcome, Refresher};
use crate::areas::repository::Repository;
use crate::artifacts::model::ChangeModel;
use crate::commands::porcelain::list::{report_failures, write_change_set};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

impl Repository {
    /// Reprint the hierarchy whenever a refresh is triggered
    ///
    /// Every line read from stdin is one trigger (an editor save hook, a file
    /// watcher piping its events). Triggers are debounced; at end of input a
    /// still-pending refresh is run before returning.
    pub async fn watch(self: Arc<Self>) -> anyhow::Result<()> {
        let model = Arc::new(ChangeModel::new());
        let refresher = Refresher::new(self.clone(), model.clone());

        let printer = self.clone();
        model.on_change().subscribe(move |change_set| {
            let mut writer = printer.writer();
            if let Err(error) = write_change_set(&mut **writer, change_set)
                .and_then(|_| writeln!(writer))
            {
                tracing::warn!(%error, "failed to print changes");
            }
        });
        refresher.on_complete().subscribe(|outcome| {
            if let RefreshOutcome::Applied { failures, .. } = outcome {
                report_failures(failures);
            }
        });

        refresher.refresh().await;

        let mut triggers = BufReader::new(tokio::io::stdin()).lines();
        while triggers.next_line().await?.is_some() {
            refresher.trigger();
        }
        refresher.flush().await;

        Ok(())
    }
}
