//! Scenario tests exercising the public API of `textpat_runtime` end to end.

#[cfg(test)]
mod postal_banchi;
#[cfg(test)]
mod scenarios;
