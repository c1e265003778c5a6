use super::*;
use crate::service::DialogOptions;

#[test]
fn test_create_dir() {
    let fs = MemoryFs::new();

    fs.create_dir("/home").unwrap();
    assert!(fs.exists("/home").unwrap());

    // Should fail - already exists
    assert_eq!(fs.create_dir("/home"), Err(FsError::AlreadyExists));
}

#[test]
fn test_create_dir_requires_parent() {
    let fs = MemoryFs::new();

    assert_eq!(fs.create_dir("/home/user"), Err(FsError::NotFound));
}

#[test]
fn test_create_dir_all() {
    let fs = MemoryFs::new();

    fs.create_dir_all("/home/user/Documents").unwrap();
    assert!(fs.exists("/home").unwrap());
    assert!(fs.exists("/home/user").unwrap());
    assert!(fs.exists("/home/user/Documents").unwrap());
}

#[test]
fn test_create_dir_all_blocked_by_file() {
    let fs = MemoryFs::new();

    fs.write_file("/blocker", b"x").unwrap();
    assert_eq!(
        fs.create_dir_all("/blocker/child"),
        Err(FsError::NotADirectory)
    );
}

#[test]
fn test_write_read_file() {
    let fs = MemoryFs::new();

    fs.create_dir("/home").unwrap();
    fs.write_file("/home/test.txt", b"Hello, World!").unwrap();

    let content = fs.read_file("/home/test.txt").unwrap();
    assert_eq!(content, b"Hello, World!");
}

#[test]
fn test_read_dir() {
    let fs = MemoryFs::new();

    fs.create_dir_all("/home/user").unwrap();
    fs.write_file("/home/user/file1.txt", b"1").unwrap();
    fs.write_file("/home/user/file2.txt", b"2").unwrap();
    fs.create_dir("/home/user/Documents").unwrap();

    let entries = fs.read_dir("/home/user").unwrap();
    assert_eq!(entries.len(), 3);

    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert!(names.contains(&"file1.txt"));
    assert!(names.contains(&"file2.txt"));
    assert!(names.contains(&"Documents"));
}

#[test]
fn test_read_dir_excludes_grandchildren() {
    let fs = MemoryFs::new();

    fs.create_dir_all("/a/b").unwrap();
    fs.write_file("/a/b/deep.txt", b"x").unwrap();

    let entries = fs.read_dir("/a").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "b");
}

#[test]
fn test_delete_file() {
    let fs = MemoryFs::new();

    fs.write_file("/note.txt", b"x").unwrap();
    fs.delete("/note.txt").unwrap();
    assert!(!fs.exists("/note.txt").unwrap());
}

#[test]
fn test_delete_directory_recursive() {
    let fs = MemoryFs::new();

    fs.create_dir_all("/proj/src").unwrap();
    fs.write_file("/proj/src/main.rs", b"fn main() {}").unwrap();
    fs.delete("/proj").unwrap();

    assert!(!fs.exists("/proj").unwrap());
    assert!(!fs.exists("/proj/src").unwrap());
    assert!(!fs.exists("/proj/src/main.rs").unwrap());
}

#[test]
fn test_delete_root_rejected() {
    let fs = MemoryFs::new();
    assert!(matches!(fs.delete("/"), Err(FsError::InvalidPath(_))));
}

#[test]
fn test_rename_file() {
    let fs = MemoryFs::new();

    fs.write_file("/old.txt", b"data").unwrap();
    fs.rename("/old.txt", "/new.txt").unwrap();

    assert!(!fs.exists("/old.txt").unwrap());
    assert_eq!(fs.read_file("/new.txt").unwrap(), b"data");
}

#[test]
fn test_rename_directory_moves_descendants() {
    let fs = MemoryFs::new();

    fs.create_dir_all("/a/nested").unwrap();
    fs.write_file("/a/nested/file.txt", b"deep").unwrap();
    fs.rename("/a", "/b").unwrap();

    assert!(!fs.exists("/a/nested/file.txt").unwrap());
    assert_eq!(fs.read_file("/b/nested/file.txt").unwrap(), b"deep");
}

#[test]
fn test_rename_into_existing_rejected() {
    let fs = MemoryFs::new();

    fs.write_file("/a.txt", b"a").unwrap();
    fs.write_file("/b.txt", b"b").unwrap();
    assert_eq!(fs.rename("/a.txt", "/b.txt"), Err(FsError::AlreadyExists));
}

#[test]
fn test_copy_overwrites_destination() {
    let fs = MemoryFs::new();

    fs.create_dir("/Pictures").unwrap();
    fs.create_dir("/Desktop").unwrap();
    fs.write_file("/Pictures/photo.png", b"new bytes").unwrap();
    fs.write_file("/Desktop/photo.png", b"old bytes").unwrap();

    fs.copy("/Pictures/photo.png", "/Desktop/photo.png").unwrap();
    assert_eq!(fs.read_file("/Desktop/photo.png").unwrap(), b"new bytes");
}

#[test]
fn test_copy_requires_file_source() {
    let fs = MemoryFs::new();

    fs.create_dir("/dir").unwrap();
    assert_eq!(fs.copy("/dir", "/elsewhere"), Err(FsError::NotAFile));
    assert_eq!(fs.copy("/missing", "/elsewhere"), Err(FsError::NotFound));
}

#[test]
fn test_copy_dir_recursive() {
    let fs = MemoryFs::new();

    fs.create_dir_all("/src/inner").unwrap();
    fs.write_file("/src/top.txt", b"t").unwrap();
    fs.write_file("/src/inner/leaf.txt", b"l").unwrap();

    fs.copy_dir("/src", "/dst").unwrap();

    assert_eq!(fs.read_file("/dst/top.txt").unwrap(), b"t");
    assert_eq!(fs.read_file("/dst/inner/leaf.txt").unwrap(), b"l");
    // Source untouched
    assert!(fs.exists("/src/inner/leaf.txt").unwrap());
}

#[test]
fn test_copy_dir_into_itself_rejected() {
    let fs = MemoryFs::new();

    fs.create_dir("/src").unwrap();
    assert!(matches!(
        fs.copy_dir("/src", "/src/copy"),
        Err(FsError::InvalidPath(_))
    ));
}

#[test]
fn test_stat() {
    let fs = MemoryFs::new();

    fs.write_file("/file.bin", b"12345").unwrap();
    let entry = fs.stat("/file.bin").unwrap();

    assert_eq!(entry.name, "file.bin");
    assert_eq!(entry.size, 5);
    assert!(entry.is_file());

    assert_eq!(fs.stat("/missing"), Err(FsError::NotFound));
}

#[test]
fn test_dialog_capability_unavailable() {
    let fs = MemoryFs::new();
    let err = fs.open_file_dialog(&DialogOptions::default()).unwrap_err();
    assert!(err.is_capability_unavailable());
}
