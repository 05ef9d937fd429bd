use dioxus::prelude::*;
use tracing::{info, warn};

use crate::context::AppContext;
use crate::session::SessionSignal;
use crate::views::ViewError;
use crate::vm::ExportedVm;

#[derive(Clone, Debug, PartialEq)]
pub enum ExportStatus {
    Idle,
    Working,
    Ready(ExportedVm),
    Failed(ViewError),
}

/// Export state for the calling component plus the action that starts an export.
///
/// Rendering runs on the blocking pool; the status flips back once it lands.
pub fn use_certificate_export() -> (Signal<ExportStatus>, Callback<()>) {
    let ctx = use_context::<AppContext>();
    let session = use_context::<SessionSignal>();
    let mut status = use_signal(|| ExportStatus::Idle);

    let export = use_callback(move |()| {
        if matches!(*status.peek(), ExportStatus::Working) {
            return;
        }
        let summary = match session.certificate_summary(&ctx.clock()) {
            Ok(summary) => summary,
            Err(err) => {
                warn!(error = %err, "certificate requested before the quiz finished");
                status.set(ExportStatus::Failed(err.into()));
                return;
            }
        };

        status.set(ExportStatus::Working);
        let exporter = ctx.certificate_exporter();
        spawn(async move {
            let joined = tokio::task::spawn_blocking(move || exporter.export(&summary)).await;
            let next = match joined {
                Ok(Ok(exported)) => {
                    info!(bytes = exported.png.len(), opened = exported.opened, "certificate ready");
                    ExportStatus::Ready(ExportedVm::from(&exported))
                }
                Ok(Err(err)) => {
                    warn!(error = %err, "certificate export failed");
                    ExportStatus::Failed(err.into())
                }
                Err(err) => {
                    warn!(error = %err, "certificate export task aborted");
                    ExportStatus::Failed(ViewError::Unknown)
                }
            };
            status.set(next);
        });
    });

    (status, export)
}
