//! Defines [`CandidateSource`], the interface to the miner that
//! enumerates candidate classification rules.
use crate::dataset::Dataset;
use crate::rule::Candidate;


/// A producer of candidate classification rules.
///
/// Implementors enumerate antecedents over a training set and
/// hand each `antecedent -> class` candidate,
/// together with its three support counts, to `sink`.
/// Candidates are handed over one at a time;
/// `sink` returns `false` to stop the enumeration early.
pub trait CandidateSource {
    /// Enumerate the candidates over `training`.
    fn generate<F>(&self, training: &Dataset, sink: F)
        where F: FnMut(Candidate) -> bool;
}


/// Pre-computed candidates are handed over in order.
impl CandidateSource for [Candidate] {
    fn generate<F>(&self, _training: &Dataset, mut sink: F)
        where F: FnMut(Candidate) -> bool
    {
        for candidate in self {
            if !sink(candidate.clone()) { break; }
        }
    }
}


impl CandidateSource for Vec<Candidate> {
    fn generate<F>(&self, training: &Dataset, sink: F)
        where F: FnMut(Candidate) -> bool
    {
        self[..].generate(training, sink)
    }
}
