use std::collections::BTreeSet;
use std::sync::Arc;

use crate::error::HostError;
use crate::host::ShortcutHost;

/// Best-effort removal of launcher shortcuts for deleted conversations.
#[derive(Clone)]
pub struct ShortcutDeregistration {
    host: Arc<dyn ShortcutHost>,
}

impl ShortcutDeregistration {
    pub fn new(host: Arc<dyn ShortcutHost>) -> Self {
        Self { host }
    }

    /// Remove all `ids` in a single host call.
    ///
    /// Failures are logged and handed back for the caller to record; they are
    /// never worth failing the surrounding operation over.
    pub fn remove_shortcuts<I, S>(&self, ids: I) -> Result<(), HostError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: BTreeSet<String> = ids.into_iter().map(Into::into).collect();
        if ids.is_empty() {
            return Ok(());
        }

        self.host.remove_shortcuts(&ids).inspect_err(|e| {
            tracing::warn!(count = ids.len(), error = %e, "shortcut removal failed");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryShortcutHost;

    #[test]
    fn test_batches_ids_in_one_call() {
        let host = Arc::new(MemoryShortcutHost::new());
        let adapter = ShortcutDeregistration::new(host.clone());

        adapter.remove_shortcuts(["b", "a", "b"]).unwrap();

        let batches = host.batches();
        assert_eq!(batches.len(), 1);
        assert_eq!(
            batches[0].iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_empty_set_makes_no_call() {
        let host = Arc::new(MemoryShortcutHost::new());
        let adapter = ShortcutDeregistration::new(host.clone());

        adapter.remove_shortcuts(Vec::<String>::new()).unwrap();
        assert!(host.batches().is_empty());
    }

    #[test]
    fn test_failure_is_returned() {
        let host = Arc::new(MemoryShortcutHost::new());
        host.set_failing(true);
        let adapter = ShortcutDeregistration::new(host.clone());

        assert!(adapter.remove_shortcuts(["a"]).is_err());
        assert_eq!(host.batches().len(), 1);
    }
}
