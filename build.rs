#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    let mut res = WindowsResource::new();
    if std::path::Path::new("res/sitejobs.ico").exists() {
        res.set_icon("res/sitejobs.ico");
    }
    res.set("FileDescription", "sitejobs CLI")
        .set("ProductName", "sitejobs")
        .set("OriginalFilename", "sitejobs.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed version resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
