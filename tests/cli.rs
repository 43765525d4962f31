use assert_cmd::Command;
use flate2::Compression;
use flate2::write::GzEncoder;
use predicates::prelude::*;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use tempfile::tempdir;

const CONTENTS: &str = "\
usr/lib/x86_64-linux-gnu/libc.so.6                      libs/libc6
usr/lib/x86_64-linux-gnu/libm.so.6                      libs/libc6
usr/lib/x86_64-linux-gnu/libpthread.so.0                libs/libc6
usr/bin/busybox                                         utils/busybox
usr/share/doc/busybox/copyright                         utils/busybox,utils/busybox-static
usr/bin/vim.basic                                       editors/vim
usr/share/vim/vim90/My Syntax File.vim                  editors/vim
lonely
";

fn write_contents(dir: &Path, arch: &str, text: &[u8]) {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text).unwrap();
    fs::write(
        dir.join(format!("Contents-{arch}.gz")),
        encoder.finish().unwrap(),
    )
    .unwrap();
}

fn row(name: &str, count: u64) -> String {
    format!("{name:<30} {count}\n")
}

fn debcontents(cwd: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("debcontents"));
    cmd.current_dir(cwd)
        .env_remove("DEBIAN_MIRROR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn reports_top_packages_from_local_mirror() {
    let temp = tempdir().unwrap();
    write_contents(temp.path(), "amd64", CONTENTS.as_bytes());

    let expected = [
        row("libs/libc6", 3),
        row("editors/vim", 2),
        row("utils/busybox", 2),
    ]
    .concat();

    debcontents(temp.path())
        .arg("amd64")
        .arg("-n")
        .arg("3")
        .arg("--mirror")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff(expected))
        .stderr(predicate::str::contains("Downloading:"))
        .stderr(predicate::str::contains("Top 3 packages by number of files:"));
}

#[test]
fn top_larger_than_package_count_lists_everything() {
    let temp = tempdir().unwrap();
    write_contents(temp.path(), "arm64", CONTENTS.as_bytes());

    let assert = debcontents(temp.path())
        .args(["arm64", "--top", "50", "--mirror"])
        .arg(temp.path())
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(stdout.lines().count(), 4);
    assert!(stdout.ends_with(&row("utils/busybox-static", 1)));
}

#[test]
fn mirror_taken_from_environment() {
    let temp = tempdir().unwrap();
    write_contents(temp.path(), "mips", b"bin/true base/coreutils\n");

    debcontents(temp.path())
        .arg("mips")
        .env("DEBIAN_MIRROR", temp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff(row("base/coreutils", 1)));
}

#[test]
fn file_url_mirror() {
    let temp = tempdir().unwrap();
    write_contents(temp.path(), "i386", b"bin/sh shells/dash\n");

    debcontents(temp.path())
        .arg("i386")
        .arg("--mirror")
        .arg(format!("file://{}", temp.path().display()))
        .assert()
        .success()
        .stdout(predicate::str::diff(row("shells/dash", 1)));
}

#[test]
fn missing_index_exits_with_one() {
    let temp = tempdir().unwrap();

    debcontents(temp.path())
        .args(["riscv64", "--mirror"])
        .arg(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("ERROR"))
        .stderr(predicate::str::contains("Contents-riscv64.gz"));
}

#[test]
fn corrupt_index_exits_with_one() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("Contents-amd64.gz"), b"not gzip at all").unwrap();

    debcontents(temp.path())
        .args(["amd64", "--mirror"])
        .arg(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error reading gzip file"));
}

#[test]
fn unreachable_http_mirror_exits_with_one() {
    let temp = tempdir().unwrap();

    debcontents(temp.path())
        .args(["amd64", "--mirror", "http://127.0.0.1:1/debian/dists/stable/main/"])
        .env("NO_PROXY", "127.0.0.1")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("ERROR"));
}

/// Answer one request on a loopback port with `status_line` and return the base URL.
fn serve_status_once(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        if let Ok((mut socket, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf);
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
            );
            let _ = socket.write_all(response.as_bytes());
        }
    });

    format!("http://{addr}/")
}

#[test]
fn http_not_found_exits_with_one() {
    let temp = tempdir().unwrap();
    let base = serve_status_once("404 Not Found");

    debcontents(temp.path())
        .args(["amd64", "--mirror", &base])
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("all_proxy")
        .env("NO_PROXY", "127.0.0.1")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("HTTP error"))
        .stderr(predicate::str::contains("404"));
}

#[test]
fn missing_arch_is_usage_error() {
    let temp = tempdir().unwrap();

    debcontents(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("ARCH"));
}
