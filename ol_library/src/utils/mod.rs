pub mod file_utils;

/// Strip every trailing `/` from a base address so paths can be appended with a single separator
pub fn trim_base_uri(base: &str) -> &str {
    base.trim_end_matches('/')
}

pub fn format_uri(base: &str, path: &str) -> String {
    format!("{}/{}", trim_base_uri(base), path.trim_start_matches('/'))
}

/// The endpoint a worker exposes for running the named function
pub fn calculate_invoke_uri(base: &str, function_name: &str) -> String {
    format_uri(base, &format!("invoke/{}", function_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("http://127.0.0.1:5000", "echo", "http://127.0.0.1:5000/invoke/echo")]
    #[case("http://127.0.0.1:5000/", "echo", "http://127.0.0.1:5000/invoke/echo")]
    #[case("http://localhost:8080//", "hello", "http://localhost:8080/invoke/hello")]
    #[case("http://worker.local", "cnn-1.0.2", "http://worker.local/invoke/cnn-1.0.2")]
    #[case("http://worker.local/prefix/", "f", "http://worker.local/prefix/invoke/f")]
    fn format_invoke_correctly(#[case] base: &str, #[case] func: &str, #[case] expected: &str) {
        let ans = calculate_invoke_uri(base, func);
        assert_eq!(expected, ans);
    }

    #[rstest]
    #[case("http://localhost:8080", "/status", "http://localhost:8080/status")]
    #[case("http://localhost:8080/", "status", "http://localhost:8080/status")]
    fn format_uri_single_separator(#[case] base: &str, #[case] path: &str, #[case] expected: &str) {
        assert_eq!(expected, format_uri(base, path));
    }
}
