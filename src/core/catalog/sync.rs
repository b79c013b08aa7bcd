use std::path::PathBuf;

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use super::{FillRequest, TranslationCatalog};
use crate::core::{
    codec::write_document,
    data::{Topic, Translations},
    error::Result,
    extract::ExtractedKeys,
    store::FileStore,
};

/// One key to be added with an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlannedKey {
    pub topic: Topic,
    pub key: String,
    pub language: String,
}

/// Everything a sync would write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    /// Documents that do not exist yet.
    pub created: Vec<PathBuf>,
    /// Keys to add, grouped by topic in discovery order.
    pub additions: Vec<PlannedKey>,
}

impl SyncPlan {
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.additions.is_empty()
    }
}

impl<S: FileStore> TranslationCatalog<S> {
    /// Work out which keys are missing without writing anything.
    ///
    /// Source topics outside the catalog's scope (see
    /// [`TranslationCatalog::in_scope`]) are ignored. Two sources of gaps:
    /// - keys referenced in source but absent from a language's document
    /// - keys present in one language of a topic but absent from another
    ///
    /// Every document either kind of gap would create is listed in
    /// [`SyncPlan::created`].
    pub fn plan_sync(&self, extracted: &ExtractedKeys) -> Result<SyncPlan> {
        let languages = self.list_languages();
        let mut created: IndexSet<PathBuf> = IndexSet::new();
        let mut additions: IndexSet<PlannedKey> = IndexSet::new();

        for (topic_name, keys) in extracted {
            let topic = Topic::parse(topic_name);
            if !self.in_scope(&topic) {
                debug!(topic = %topic, "skipping topic outside the catalog scope");
                continue;
            }
            for language in &languages {
                let path = self.locate(&topic, language).path();
                if !self.store.exists(&path) {
                    created.insert(path.clone());
                }
                let translations = self.read_or_empty(&path)?;
                for key in keys {
                    if !translations.contains_path(key) {
                        additions.insert(PlannedKey {
                            topic: topic.clone(),
                            key: key.clone(),
                            language: language.clone(),
                        });
                    }
                }
            }
        }

        for topic_name in self.list_topics().keys() {
            let topic = Topic::parse(topic_name);
            for missing in self.missing_keys(&topic)? {
                if !self.store.exists(&missing.path) {
                    created.insert(missing.path.clone());
                }
                additions.insert(PlannedKey {
                    topic: topic.clone(),
                    key: missing.key,
                    language: missing.language,
                });
            }
        }

        Ok(SyncPlan {
            created: created.into_iter().collect(),
            additions: additions.into_iter().collect(),
        })
    }

    /// Write a plan: create its documents, then fill its keys with `""`.
    pub fn apply_sync(&self, plan: &SyncPlan) -> Result<()> {
        for path in &plan.created {
            if !self.store.exists(path) {
                write_document(&self.store, path, &Translations::new())?;
            }
        }

        let mut requests: IndexMap<&Topic, FillRequest> = IndexMap::new();
        for planned in &plan.additions {
            requests
                .entry(&planned.topic)
                .or_default()
                .entry(planned.key.clone())
                .or_default()
                .insert(planned.language.clone(), String::new());
        }
        for (topic, request) in requests {
            self.fill_keys(topic, &request)?;
        }

        debug!(
            created = plan.created.len(),
            added = plan.additions.len(),
            "applied sync"
        );
        Ok(())
    }

    /// Plan and apply in one step.
    pub fn sync(&self, extracted: &ExtractedKeys) -> Result<SyncPlan> {
        let plan = self.plan_sync(extracted)?;
        self.apply_sync(&plan)?;
        Ok(plan)
    }
}
