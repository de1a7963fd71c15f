//! Command chain interpreter: split, tokenize and fold.

mod pipeline;
mod split;
mod tokenizer;

pub use pipeline::{Pipeline, PipelineOutput};
pub use split::{SplitInput, split_input};
pub use tokenizer::{ChainToken, ChainTokenizer, CleanScan};
