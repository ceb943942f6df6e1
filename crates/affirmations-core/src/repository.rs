//! The fixed affirmation data set.

use crate::resources::{ImageRef, StringKey};
use crate::types::{Affirmation, AffirmationId};

/// Number of records the repository produces
pub const AFFIRMATION_COUNT: usize = 10;

/// Source of the affirmation list
///
/// Content is fixed at build time: record `n` shows `affirmationN` over
/// `imageN`, and every card labels its toggle with the same accessible text.
#[derive(Debug, Clone, Copy, Default)]
pub struct AffirmationRepository;

impl AffirmationRepository {
    /// Produce every record in display order.
    ///
    /// Pure: repeated calls return equal lists.
    pub fn load_affirmations(&self) -> Vec<Affirmation> {
        let affirmations: Vec<Affirmation> = (1..=AFFIRMATION_COUNT as u8)
            .map(|number| {
                Affirmation::new(
                    AffirmationId(usize::from(number) - 1),
                    StringKey::Affirmation(number),
                    StringKey::ExpandButtonDescription,
                    ImageRef::new(number),
                )
            })
            .collect();
        tracing::debug!(count = affirmations.len(), "Loaded affirmations");
        affirmations
    }
}
