use std::fs;
use std::path::Path;

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
            .unwrap();
    } else {
        // No built frontend yet: keep include_dir! satisfied with a stub page.
        let dist = out_dir.join("dist");
        fs::create_dir_all(&dist).unwrap();
        let index = dist.join("index.html");
        if !index.exists() {
            fs::write(
                &index,
                "<!doctype html><html><body><p>Frontend sin compilar. Ejecute trunk build en frontend/.</p></body></html>",
            )
            .unwrap();
        }
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
