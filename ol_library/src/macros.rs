#[macro_export]
/// A helper macro to get the last item in the [crate::bail_error] macro, which will be the error message.
macro_rules! last {
  ([$single:tt] $($rest:tt)*) => {
    $single // base case
  };
  ([$first:tt $($rest:tt)*] $($reversed:tt)*) => {
    $crate::last!([$($rest)*] $first $($reversed)*)  // recursion
  };
}

#[macro_export]
/// Log an error with structured fields, then return the final message as an [anyhow::Error].
///
/// # Example
/// ```
/// use ol_library::bail_error;
///
/// fn build_client(fails: bool) -> anyhow::Result<()> {
///   let tid = "cli".to_string();
///   if fails {
///     bail_error!(tid=%tid, timeout=15, "Unable to build HTTP client");
///   }
///   Ok(())
/// }
/// assert_eq!(build_client(true).err().unwrap().to_string(), "Unable to build HTTP client");
/// assert!(build_client(false).is_ok());
/// ```
macro_rules! bail_error {
  ($($arg:tt)+) => {
    {
      tracing::error!($($arg)+);
      anyhow::bail!($crate::last!([$($arg)+]))
    }
  };
}

#[cfg(test)]
mod tests {
    fn fails_with_fields(path: &str) -> anyhow::Result<u32> {
        bail_error!(path = path, code = 2, "Could not read body file");
    }

    fn fails_plain() -> anyhow::Result<u32> {
        bail_error!("Header entry is missing a colon");
    }

    #[test]
    fn message_is_last_token() {
        let err = fails_with_fields("/tmp/none.json").unwrap_err();
        assert_eq!(err.to_string(), "Could not read body file");
    }

    #[test]
    fn message_without_fields() {
        let err = fails_plain().unwrap_err();
        assert_eq!(err.to_string(), "Header entry is missing a colon");
    }
}
