use agents_fs::{checksum, dirsync};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::fs;
use tempfile::tempdir;

fn populate(root: &std::path::Path, dirs: usize, files_per_dir: usize) {
    for d in 0..dirs {
        let dir = root.join(format!("dir{d}"));
        fs::create_dir_all(&dir).unwrap();
        for f in 0..files_per_dir {
            fs::write(dir.join(format!("file{f}.md")), format!("# doc {d}/{f}\n")).unwrap();
        }
    }
}

fn digest_benchmark(c: &mut Criterion) {
    c.bench_function("checksum::digest (directory, 200 files)", |b| {
        let dir = tempdir().unwrap();
        populate(dir.path(), 10, 20);

        b.iter(|| checksum::digest(black_box(dir.path())))
    });

    c.bench_function("checksum::digest (single file)", |b| {
        let dir = tempdir().unwrap();
        let file = dir.path().join("AGENTS.md");
        fs::write(&file, "x".repeat(64 * 1024)).unwrap();

        b.iter(|| checksum::digest(black_box(&file)))
    });
}

fn sync_benchmark(c: &mut Criterion) {
    c.bench_function("dirsync::sync (unchanged, 200 files)", |b| {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        populate(&src, 10, 20);
        dirsync::sync(&src, &dst).unwrap();

        b.iter(|| dirsync::sync(black_box(&src), black_box(&dst)).unwrap())
    });
}

criterion_group!(benches, digest_benchmark, sync_benchmark);
criterion_main!(benches);
