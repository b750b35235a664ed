use std::fs;
use std::path::Path;

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).expect("failed to create host/static");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .expect("failed to copy ../frontend/dist into host/static");
    }
    // include_dir! needs the directory to exist even before the first trunk build.
    fs::create_dir_all(out_dir.join("dist")).expect("failed to create host/static/dist");
    println!("cargo:rerun-if-changed=../frontend/dist");
}
