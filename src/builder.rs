use crate::aligner::Aligner;
use crate::error::Result;
use crate::ops::Operation;
use crate::traceback::Precedence;

pub struct AlignerBuilder {
    precedence: Option<Precedence>,
}

impl AlignerBuilder {
    pub fn new() -> Self {
        Self { precedence: None }
    }
    pub fn with_precedence(mut self, precedence: Precedence) -> Self {
        self.precedence = Some(precedence);
        self
    }
    /// Shorthand for `with_precedence(Precedence::new(order)?)`.
    pub fn with_order(self, order: [Operation; 4]) -> Result<Self> {
        Ok(self.with_precedence(Precedence::new(order)?))
    }
    pub fn build(self) -> Aligner {
        match self.precedence {
            Some(p) => Aligner::with_precedence(p),
            None => Aligner::new(),
        }
    }
}

impl Default for AlignerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
