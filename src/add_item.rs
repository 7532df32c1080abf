//! Add-Item Flow
//!
//! Orchestrates the upload-then-write sequence behind the add-item form.
//! The flow is an explicit state machine so the retained-form-on-failure
//! behavior is observable instead of incidental.

use std::rc::Rc;

use tracing::error;
use uuid::Uuid;

use crate::models::{ImageFile, Item, ItemDraft};
use crate::providers::{ObjectStore, StoreError};
use crate::repository::ItemRepository;

/// States of one add-item submission
///
/// `Idle -> Editing -> [Uploading ->] Writing -> Idle` on success; a failed
/// upload or write lands back in `Editing` with the form values retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddItemState {
    #[default]
    Idle,
    Editing,
    Uploading,
    Writing,
}

/// Terminal result of one submission
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Document written; the caller appends the item locally and clears
    /// the form.
    Added(Item),
    /// Upload failed; nothing was written, the form stays as entered.
    UploadFailed(StoreError),
    /// Document write failed after a successful (or skipped) upload; the
    /// caller logs the error and the form stays as entered.
    WriteFailed(StoreError),
}

pub struct AddItemService {
    objects: Rc<dyn ObjectStore>,
    repo: Rc<ItemRepository>,
}

impl AddItemService {
    pub fn new(objects: Rc<dyn ObjectStore>, repo: Rc<ItemRepository>) -> Self {
        Self { objects, repo }
    }

    /// Run one submission: upload the image (if any), then write the record.
    ///
    /// The upload is strictly sequenced before the write so the record
    /// carries the resolved URL. `progress` is called on every state change;
    /// the form mirrors it and tests assert on it.
    pub async fn submit(
        &self,
        owner_id: &str,
        draft: &ItemDraft,
        image: Option<&ImageFile>,
        mut progress: impl FnMut(AddItemState),
    ) -> SubmitOutcome {
        let image_url = match image {
            Some(file) => {
                progress(AddItemState::Uploading);
                match self.upload(file).await {
                    Ok(url) => url,
                    Err(err) => {
                        error!(%err, "image upload failed, aborting submission");
                        progress(AddItemState::Editing);
                        return SubmitOutcome::UploadFailed(err);
                    }
                }
            }
            None => String::new(),
        };

        progress(AddItemState::Writing);
        match self.repo.add_item(owner_id, draft, &image_url).await {
            Ok(item) => {
                progress(AddItemState::Idle);
                SubmitOutcome::Added(item)
            }
            Err(err) => {
                progress(AddItemState::Editing);
                SubmitOutcome::WriteFailed(err)
            }
        }
    }

    async fn upload(&self, file: &ImageFile) -> Result<String, StoreError> {
        let key = object_key(&file.name);
        let handle = self.objects.put(&key, &file.bytes).await?;
        self.objects.public_url(&handle).await
    }
}

/// Storage key for an uploaded image.
///
/// The original keyed objects by raw file name, silently overwriting on name
/// collision; keys now carry a random prefix so identically named files
/// cannot clobber each other.
pub fn object_key(file_name: &str) -> String {
    format!("images/{}-{}", Uuid::new_v4(), file_name)
}
