// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &[u8]) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content)?;
    Ok(path)
}

/// Writes a JPEG carrying only an APP1/Exif segment with IFD0 `Model` and
/// `DateTime` entries.
pub fn create_test_jpeg(
    dir: &Path,
    name: &str,
    model: Option<&str>,
    datetime: Option<&str>,
) -> Result<PathBuf> {
    let mut entries: Vec<(u16, &str)> = Vec::new();
    if let Some(model) = model {
        entries.push((0x0110, model));
    }
    if let Some(datetime) = datetime {
        entries.push((0x0132, datetime));
    }

    let mut tiff = b"II\x2a\x00\x08\x00\x00\x00".to_vec();
    let mut data_offset = 8 + 2 + 12 * entries.len() + 4;
    let mut data = Vec::new();

    tiff.extend_from_slice(&u16::try_from(entries.len())?.to_le_bytes());
    for (tag, text) in entries {
        let mut value = text.as_bytes().to_vec();
        value.push(0);
        tiff.extend_from_slice(&tag.to_le_bytes());
        tiff.extend_from_slice(&2_u16.to_le_bytes());
        tiff.extend_from_slice(&u32::try_from(value.len())?.to_le_bytes());
        if value.len() <= 4 {
            value.resize(4, 0);
            tiff.extend_from_slice(&value);
        } else {
            tiff.extend_from_slice(&u32::try_from(data_offset)?.to_le_bytes());
            data_offset += value.len();
            data.extend_from_slice(&value);
        }
    }
    tiff.extend_from_slice(&0_u32.to_le_bytes());
    tiff.extend_from_slice(&data);

    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend_from_slice(&u16::try_from(8 + tiff.len())?.to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);

    create_test_file(dir, name, &jpeg)
}

/// A small photo library:
///
/// | file                | model            | date       |
/// |---------------------|------------------|------------|
/// | a.jpg               | Canon EOS        | 2021:01:01 |
/// | b.jpg               | Nikon D90        | 2021:01:01 |
/// | 2022/IMG_0001.JPG   | Canon PowerShot  | 2022:07:14 |
/// | 2022/trip/DSC.jpeg  | Nikon Z6         | 2022:07:15 |
/// | 2022/no_exif.jpg    | (no EXIF)        |            |
/// | notes.txt, x.png    | (not JPEG)       |            |
pub fn setup_photo_library() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    create_test_jpeg(root, "a.jpg", Some("Canon EOS"), Some("2021:01:01 09:00:00"))?;
    create_test_jpeg(root, "b.jpg", Some("Nikon D90"), Some("2021:01:01 17:30:00"))?;
    create_test_jpeg(
        root,
        "2022/IMG_0001.JPG",
        Some("Canon PowerShot"),
        Some("2022:07:14 12:00:00"),
    )?;
    create_test_jpeg(
        root,
        "2022/trip/DSC.jpeg",
        Some("Nikon Z6"),
        Some("2022:07:15 08:15:00"),
    )?;
    create_test_file(root, "2022/no_exif.jpg", &[0xFF, 0xD8, 0xFF, 0xD9])?;
    create_test_file(root, "notes.txt", b"Not a photo")?;
    create_test_jpeg(root, "x.png", Some("Canon EOS"), Some("2021:01:01 09:00:00"))?;

    Ok(temp_dir)
}
