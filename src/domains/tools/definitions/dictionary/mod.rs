//! Dictionary tools module.
//!
//! Seven tools over the Merriam-Webster collegiate API, each reshaping the
//! same raw entry payload differently:
//! - `meaning`, `part_of_speech`, `pronunciations`, `stems`: single lookup,
//!   one field extracted
//! - `meanings_of_stems`, `stem_info`: fan out with one extra lookup per stem
//! - `full_info`: everything behind boolean switches, first entry only
//!
//! Every failure - network, bad status, malformed payload, missing key - is
//! swallowed into a sentinel value inside the normal result payload; this
//! service never surfaces a protocol-level fault to the caller.

pub mod client;
pub mod entry;

pub mod full_info;
pub mod meaning;
pub mod meanings_of_stems;
pub mod part_of_speech;
pub mod pronunciations;
pub mod stem_info;
pub mod stems;

pub use client::{DictionaryClient, FetchError, Lookup};
pub use entry::{Entry, EntryData};

pub use full_info::{FullInfoParams, FullInfoTool};
pub use meaning::{MeaningParams, MeaningTool};
pub use meanings_of_stems::{MeaningsOfStemsParams, MeaningsOfStemsTool};
pub use part_of_speech::{PartOfSpeechParams, PartOfSpeechTool};
pub use pronunciations::{PronunciationsParams, PronunciationsTool};
pub use stem_info::{StemInfoParams, StemInfoTool};
pub use stems::{StemsParams, StemsTool};
