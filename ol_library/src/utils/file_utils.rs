use crate::transaction::TransactionId;
use std::path::Path;
use tracing::debug;

/// Read the whole file into memory, byte for byte
pub fn read_bytes<P: AsRef<Path>>(path: P, tid: &TransactionId) -> std::io::Result<Vec<u8>> {
    let pth: &Path = path.as_ref();
    let bytes = std::fs::read(pth)?;
    debug!(tid=tid, path=%pth.display(), size=bytes.len(), "Read file");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TEST_TID;
    use std::io::Write;

    #[test]
    fn reads_exact_bytes() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        let data: Vec<u8> = vec![0, 159, 146, 150, b'{', 255, b'\n'];
        f.write_all(&data).unwrap();
        assert_eq!(read_bytes(f.path(), &TEST_TID).unwrap(), data);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_bytes(dir.path().join("missing.json"), &TEST_TID).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
