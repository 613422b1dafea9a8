//! Iterator pipelines over the sample sequence of possibly-absent strings.
//!
//! Every stage is a lazy adapter: nothing is wrapped, formatted or resolved
//! until the caller pulls from the returned iterator.

use crate::error::{Error, Result};
use crate::nullable::Nullable;
use crate::settings::Settings;
use itertools::Itertools;

// =============================================================================
// Milestone 1: Source data
// =============================================================================

/// A fresh copy of the nine-entry sample data on every call.
pub fn sample_sequence() -> Vec<Option<String>> {
    vec![
        Some("One".to_string()),
        None,
        Some("Two".to_string()),
        None,
        None,
        Some("Three".to_string()),
        None,
        None,
        None,
    ]
}

// =============================================================================
// Milestone 2: Wrapping and formatting
// =============================================================================

pub fn wrap_all<I>(sequence: I) -> impl Iterator<Item = Nullable<String>>
where
    I: IntoIterator<Item = Option<String>>,
{
    sequence.into_iter().map(Nullable::from_nullable)
}

/// Brackets a present value; absent stays absent.
pub fn format_present(container: Nullable<String>, settings: &Settings) -> Nullable<String> {
    container.map(|value| settings.bracket(&value))
}

/// Wraps every entry and brackets the present ones.
pub fn wrap_and_format<'a, I>(
    sequence: I,
    settings: &'a Settings,
) -> impl Iterator<Item = Nullable<String>> + 'a
where
    I: IntoIterator<Item = Option<String>>,
    I: 'a,
{
    wrap_all(sequence).map(move |container| format_present(container, settings))
}

/// Formatted values of the present entries, in their original order.
pub fn collect_present_formatted<'a, I>(
    sequence: I,
    settings: &'a Settings,
) -> impl Iterator<Item = String> + 'a
where
    I: IntoIterator<Item = Option<String>>,
    I: 'a,
{
    wrap_and_format(sequence, settings).flatten()
}

/// Present entries unwrapped after the presence check, then bulleted (`* One`).
pub fn collect_present_bulleted<'a, I>(
    sequence: I,
    settings: &'a Settings,
) -> impl Iterator<Item = String> + 'a
where
    I: IntoIterator<Item = Option<String>>,
    I: 'a,
{
    wrap_all(sequence)
        .filter(Nullable::is_present)
        .filter_map(|container| container.get().ok())
        .map(move |value| settings.bulleted(&value))
}

// =============================================================================
// Milestone 3: Extraction strategies
// =============================================================================

/// How an absent entry is resolved to a string.
pub enum ExtractMode<F> {
    /// The supplier runs for every entry, before presence is checked.
    Eager(F),
    /// The supplier runs only for absent entries.
    Lazy(F),
    /// An absent entry raises `UserRaised` with this message and ends the sequence.
    Fail(String),
}

impl ExtractMode<fn() -> String> {
    pub fn fail(message: impl Into<String>) -> Self {
        ExtractMode::Fail(message.into())
    }
}

/// Iterator returned by [`extract_with_fallback`]. Fused after the first error.
pub struct Extract<I, F> {
    inner: I,
    mode: ExtractMode<F>,
    failed: bool,
}

impl<I, F> Iterator for Extract<I, F>
where
    I: Iterator<Item = Nullable<String>>,
    F: FnMut() -> String,
{
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let container = self.inner.next()?;

        let resolved = match &mut self.mode {
            ExtractMode::Eager(supplier) => {
                let fallback = supplier();
                Ok(container.get_or_else(fallback))
            }
            ExtractMode::Lazy(supplier) => Ok(container.get_or_else_compute(supplier)),
            ExtractMode::Fail(message) => {
                container.get_or_throw(|| Error::user_raised(message.as_str()))
            }
        };

        self.failed = resolved.is_err();
        Some(resolved)
    }
}

/// Wraps and brackets each entry, then resolves it according to `mode`.
pub fn extract_with_fallback<'a, I, F>(
    sequence: I,
    settings: &'a Settings,
    mode: ExtractMode<F>,
) -> Extract<impl Iterator<Item = Nullable<String>> + 'a, F>
where
    I: IntoIterator<Item = Option<String>>,
    I: 'a,
    F: FnMut() -> String,
{
    Extract {
        inner: wrap_and_format(sequence, settings),
        mode,
        failed: false,
    }
}

/// Runs [`extract_with_fallback`] to completion, stopping at the first error.
pub fn extract_all<'a, I, F>(
    sequence: I,
    settings: &'a Settings,
    mode: ExtractMode<F>,
) -> Result<Vec<String>>
where
    I: IntoIterator<Item = Option<String>>,
    I: 'a,
    F: FnMut() -> String,
{
    Itertools::try_collect(extract_with_fallback(sequence, settings, mode))
}

// =============================================================================
// Tests
// =============================================================================
