//! Masking for values that end up in log lines.

pub const MASK: &str = "****";

/// Renders the launch arguments (without the program name) for logging.
///
/// Any argument that follows a bare flag containing `secret` is replaced by
/// the mask, and so is the value half of a `--something-secret=value`
/// argument.
pub fn redact_launch_args(args: &[String]) -> String {
    args.iter()
        .enumerate()
        .skip(1)
        .map(|(i, arg)| {
            let prev = &args[i - 1];
            if prev.contains("secret") && !prev.contains('=') {
                MASK.to_string()
            } else if let Some((name, _)) = arg.split_once('=').filter(|(n, _)| n.contains("secret")) {
                format!("{name}={MASK}")
            } else {
                arg.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replaces the value of query parameter `param` in `url` with the mask.
pub fn mask_query_param(url: &str, param: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let masked: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if key == param => format!("{key}={MASK}"),
            _ => pair.to_string(),
        })
        .collect();

    format!("{}?{}", base, masked.join("&"))
}
