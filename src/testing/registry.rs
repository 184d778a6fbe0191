use std::sync::Arc;

use dashmap::DashMap;

use super::harness::Harness;

/// Named [`Harness`] instances shared across tests
///
/// Names are unique and registering an existing name replaces the previous
/// entry. The registry never starts or stops anything: stop an instance
/// before or after unregistering it.
#[derive(Default)]
pub struct Registry {
    servers: DashMap<String, Arc<Harness>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(skip(self, server))]
    pub fn register(&self, name: &str, server: impl Into<Arc<Harness>>) -> Arc<Harness> {
        let server = server.into();

        if self.servers.insert(name.to_string(), Arc::clone(&server)).is_some() {
            tracing::debug!("Replaced registered server");
        }

        server
    }

    #[tracing::instrument(skip(self))]
    pub fn unregister(&self, name: &str) -> Option<Arc<Harness>> {
        self.servers.remove(name).map(|(_, server)| server)
    }

    pub fn get(&self, name: &str) -> Option<Arc<Harness>> {
        self.servers.get(name).map(|entry| Arc::clone(entry.value()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.servers.contains_key(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.servers.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}
