use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("config file") {
        if haystack.contains("no such file or directory") || haystack.contains("cannot find") {
            push_hint(&mut out, "Check the path given to `--config`.");
        } else {
            push_hint(
                &mut out,
                "Check `projscan.toml` syntax: settings live under a `[scan]` table.",
            );
            push_hint(
                &mut out,
                "Valid keys are prune, skip_large_files, large_file_threshold_mb and source_extensions.",
            );
        }
    }

    if haystack.contains("[invalid_path]") {
        push_hint(&mut out, "Pass the project directory as the first argument.");
    }

    if haystack.contains("'prune'") {
        push_hint(
            &mut out,
            "`--prune` takes directory names such as `node_modules`, not paths.",
        );
    }

    if haystack.contains("'source_extensions'") {
        push_hint(&mut out, "Pass extensions without wildcards, e.g. `--ext py`.");
    }

    if haystack.contains("failed to write report") {
        push_hint(
            &mut out,
            "Verify the `--output` directory exists and is writable.",
        );
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
