use std::io::{self, BufWriter, Write};

use anyhow::Result;
use tracing::{debug, info};

use crate::printer::print_tree;
use crate::types::{ErrorPolicy, Mode, TreeOptions};

use super::Args;

pub fn options_from_args(args: &Args) -> TreeOptions {
    TreeOptions {
        mode: if args.legacy_walk {
            Mode::Legacy
        } else {
            Mode::Fixed
        },
        follow_symlinks: args.follow_symlinks,
        on_error: if args.skip_unreadable {
            ErrorPolicy::Skip
        } else {
            ErrorPolicy::Abort
        },
    }
}

pub fn run_with_args(args: &Args) -> Result<()> {
    let opts = options_from_args(args);
    info!("Printing tree: {}", args.path.display());
    debug!(?opts, "tree options");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let printed = print_tree(&args.path, &opts, &mut out);
    // Keep whatever was printed before a failure.
    let flushed = out.flush().map_err(anyhow::Error::from);

    match printed.and(flushed) {
        Err(err) if is_broken_pipe(&err) => {
            debug!("stdout closed early");
            Ok(())
        }
        other => other,
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|e| e.kind() == io::ErrorKind::BrokenPipe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn maps_flags_to_options() {
        let args = Args::try_parse_from(["dirtree", "x"]).unwrap();
        let opts = options_from_args(&args);
        assert_eq!(opts.mode, Mode::Fixed);
        assert_eq!(opts.on_error, ErrorPolicy::Abort);

        let args =
            Args::try_parse_from(["dirtree", "x", "--legacy-walk", "--skip-unreadable"]).unwrap();
        let opts = options_from_args(&args);
        assert_eq!(opts.mode, Mode::Legacy);
        assert_eq!(opts.on_error, ErrorPolicy::Skip);
        assert!(!opts.follow_symlinks);

        let args = Args::try_parse_from(["dirtree", "x", "--follow-symlinks"]).unwrap();
        assert!(options_from_args(&args).follow_symlinks);
    }

    #[test]
    fn detects_broken_pipe_through_context() {
        let err =
            anyhow::Error::from(io::Error::from(io::ErrorKind::BrokenPipe)).context("writing");
        assert!(is_broken_pipe(&err));
        assert!(!is_broken_pipe(&anyhow::anyhow!("other")));
    }
}
