//! Create, update, and delete user-defined entries.
//!
//! The functions here are pure with respect to storage: they validate form
//! input and compute the next [`UserData`]; persisting it is the caller's job.

use std::collections::HashSet;

use super::catalog::next_free_id;
use super::sanitize::{
    DEFAULT_ICON, RawAppRecord, create_slug_id, parse_custom_tag_string, sanitize_app_record,
    sanitize_http_url, sanitize_icon_source,
};
use crate::errors::ValidationError;
use crate::state::types::{AppEntry, AppOrigin};
use crate::storage::UserData;

/// Feedback shown after saving a new entry.
pub const SAVED_MESSAGE: &str = "App saved successfully.";
/// Feedback shown after updating an existing entry.
pub const UPDATED_MESSAGE: &str = "App updated successfully.";

/// Icon picker state of the entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconChoice {
    /// One of the icon-library presets.
    Preset(String),
    /// A pasted icon URL or data URI.
    Custom(String),
}

impl Default for IconChoice {
    fn default() -> Self {
        Self::Preset(DEFAULT_ICON.to_string())
    }
}

/// Raw contents of the add/edit entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomAppInput {
    /// Id of the entry being edited; `None` creates a new entry.
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Target URL.
    pub url: String,
    /// Optional description.
    pub description: String,
    /// Comma-separated tags.
    pub tags_input: String,
    /// Icon selection.
    pub icon: IconChoice,
}

impl CustomAppInput {
    /// What: Prefill the form from an existing entry for editing.
    ///
    /// Inputs:
    /// - `entry`: Entry to edit.
    /// - `icon_library`: Presets offered by the picker.
    ///
    /// Output:
    /// - Form input targeting `entry.id`; the icon is a preset when the library
    ///   contains it, a custom value otherwise.
    #[must_use]
    pub fn from_entry(entry: &AppEntry, icon_library: &[String]) -> Self {
        let icon = if icon_library.iter().any(|icon| icon == &entry.icon) {
            IconChoice::Preset(entry.icon.clone())
        } else {
            IconChoice::Custom(entry.icon.clone())
        };
        Self {
            id: Some(entry.id.clone()),
            name: entry.name.clone(),
            url: entry.url.clone().unwrap_or_default(),
            description: entry.description.clone().unwrap_or_default(),
            tags_input: entry.tags.join(", "),
            icon,
        }
    }
}

/// A validated entry ready to be written into user data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedEntry {
    /// The sanitized custom entry with its final id.
    pub entry: AppEntry,
    /// Id of the record being replaced, when editing.
    pub previous_id: Option<String>,
}

impl PreparedEntry {
    /// Feedback text for this save.
    #[must_use]
    pub const fn feedback(&self) -> &'static str {
        if self.previous_id.is_some() {
            UPDATED_MESSAGE
        } else {
            SAVED_MESSAGE
        }
    }
}

/// What: Find an editable custom entry by id.
///
/// Output:
/// - The entry, or `UnknownEntry` / `NotCustom`.
///
/// # Errors
/// - `UnknownEntry` when `id` is not in `catalog`.
/// - `NotCustom` when the entry is not user-defined.
pub fn find_custom<'a>(catalog: &'a [AppEntry], id: &str) -> Result<&'a AppEntry, ValidationError> {
    let entry = catalog
        .iter()
        .find(|entry| entry.id == id)
        .ok_or_else(|| ValidationError::UnknownEntry(id.to_string()))?;
    if entry.origin == AppOrigin::Custom {
        Ok(entry)
    } else {
        Err(ValidationError::NotCustom(id.to_string()))
    }
}

/// What: Validate the entry form and compute the entry to save.
///
/// Inputs:
/// - `input`: Form contents.
/// - `catalog`: Combined catalog, used for id reservation and edit checks.
///
/// Output:
/// - `Ok(PreparedEntry)` on success.
///
/// # Errors
/// - `MissingName`, `InvalidUrl`, `MissingCustomIcon` for bad form input.
/// - `UnknownEntry` / `NotCustom` when editing something that is not a
///   user-defined entry.
///
/// Details:
/// - New entries get `custom-<kebab(name)>`, suffixed `-2`, `-3`, … until it
///   is free among all catalog ids. Edited entries keep their id.
pub fn prepare_custom_app(
    input: &CustomAppInput,
    catalog: &[AppEntry],
) -> Result<PreparedEntry, ValidationError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    let url = sanitize_http_url(&input.url).ok_or(ValidationError::InvalidUrl)?;
    let icon = match &input.icon {
        IconChoice::Custom(value) if value.trim().is_empty() => {
            return Err(ValidationError::MissingCustomIcon);
        }
        IconChoice::Custom(value) | IconChoice::Preset(value) => sanitize_icon_source(value),
    };

    let previous_id = match input.id.as_deref().map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => Some(find_custom(catalog, id)?.id.clone()),
        None => None,
    };

    let id = previous_id.clone().unwrap_or_else(|| {
        let reserved: HashSet<String> = catalog.iter().map(|entry| entry.id.clone()).collect();
        next_free_id(&create_slug_id(AppOrigin::Custom.slug_prefix(), name), &reserved)
    });

    let raw = RawAppRecord {
        id: Some(id),
        name: Some(name.to_string()),
        description: Some(input.description.clone()),
        url: Some(url),
        icon: Some(icon),
        tags: parse_custom_tag_string(&input.tags_input),
    };
    let entry = sanitize_app_record(&raw, AppOrigin::Custom).ok_or(ValidationError::MissingName)?;
    Ok(PreparedEntry { entry, previous_id })
}

/// What: Write a prepared entry into user data.
///
/// Inputs:
/// - `user_data`: User data to update.
/// - `prepared`: Output of [`prepare_custom_app`].
///
/// Output:
/// - Replaces any record with the previous or new id, appends the entry, and
///   drops both ids from the hidden set.
pub fn apply_prepared_entry(user_data: &mut UserData, prepared: &PreparedEntry) {
    let new_id = prepared.entry.id.as_str();
    let previous = prepared.previous_id.as_deref();
    let is_replaced = |id: &str| id == new_id || Some(id) == previous;
    user_data.custom_apps.retain(|entry| !is_replaced(&entry.id));
    user_data.custom_apps.push(prepared.entry.clone());
    user_data.hidden_app_ids.retain(|id| !is_replaced(id.trim()));
}

/// What: Delete a user-defined entry.
///
/// Inputs:
/// - `user_data`: User data to update.
/// - `catalog`: Combined catalog, used to check the target's origin.
/// - `id`: Entry to delete.
///
/// # Errors
/// - `UnknownEntry` / `NotCustom` when the target is missing or not custom;
///   user data is left untouched.
pub fn remove_custom_app(
    user_data: &mut UserData,
    catalog: &[AppEntry],
    id: &str,
) -> Result<(), ValidationError> {
    find_custom(catalog, id)?;
    user_data.custom_apps.retain(|entry| entry.id != id);
    user_data.hidden_app_ids.retain(|hidden| hidden.trim() != id);
    Ok(())
}
