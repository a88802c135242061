//! Walkthrough Sample
//!
//! Builds an [`OrderedSet`] from configured values and prints its contents, both
//! traversal directions and the results of a `find` and an `upper_bound` query.

pub mod config;

use std::io::{self, Write};

use ordset::ordered::OrderedSet;

use crate::config::WalkthroughConfig;

/// Builds the set: `initial` values one at a time, then `bulk` as one batch.
pub fn build_set(config: &WalkthroughConfig) -> OrderedSet<i64> {
    let mut set = OrderedSet::new();
    for value in &config.initial {
        set.insert(*value);
    }
    let added = set.insert_iter(config.bulk.iter().copied());
    tracing::debug!(added, len = set.len(), "built walkthrough set");
    set
}

/// Writes the walkthrough report for `set`.
///
/// Lookups that name the end position (empty set) print `end`.
///
/// # Errors
///
/// Propagates any error from `writer`.
pub fn write_report<W: Write>(
    set: &OrderedSet<i64>,
    config: &WalkthroughConfig,
    writer: &mut W,
) -> io::Result<()> {
    set.write_to(writer)?;

    for element in set {
        write!(writer, "{element} ")?;
    }
    write!(writer, "Reversed iterator: ")?;
    for element in set.iter_rev() {
        write!(writer, "{element} ")?;
    }
    writeln!(writer)?;

    for position in [set.find(&config.find), set.upper_bound(&config.upper_bound)] {
        match position.value() {
            Some(value) => writeln!(writer, "{value}")?,
            None => writeln!(writer, "end")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn report(config: &WalkthroughConfig) -> String {
        let set = build_set(config);
        let mut output = Vec::new();
        write_report(&set, config, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[rstest]
    fn reference_scenario_report() {
        let expected = "-41 -10 25 26 33\n\
                        -41 -10 25 26 33 Reversed iterator: 33 26 25 -10 -41 \n\
                        33\n\
                        33\n";
        assert_eq!(report(&WalkthroughConfig::default()), expected);
    }

    #[rstest]
    fn empty_set_reports_end() {
        let config = WalkthroughConfig {
            initial: Vec::new(),
            bulk: Vec::new(),
            find: 1,
            upper_bound: 1,
        };
        assert_eq!(report(&config), "\nReversed iterator: \nend\nend\n");
    }

    #[rstest]
    fn duplicates_across_batches_collapse() {
        let config = WalkthroughConfig {
            initial: vec![3, 1],
            bulk: vec![1, 2, 3],
            find: 2,
            upper_bound: 0,
        };
        assert_eq!(build_set(&config).to_vec(), vec![1, 2, 3]);
        assert!(report(&config).ends_with("2\n1\n"));
    }
}
