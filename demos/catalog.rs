use parsable::{Accessors, Catalog};

struct Window {
    app: &'static str,
    document: Option<String>,
    flags: Vec<&'static str>,
    count: usize,
    folders: Vec<String>,
}

fn main() -> Result<(), parsable::Error> {
    let catalog = Catalog::builder()
        .with_file("demos/templates.toml", true)
        .with_env("PARSABLE_DEMO", "__")
        .build()?;

    let fields = Accessors::new()
        .with("app", |w: &Window| w.app)
        .with("document", |w: &Window| w.document.clone())
        .with("flags", |w: &Window| w.flags.clone())
        .with("count", |w: &Window| match w.count {
            0 => None,
            n => Some(n),
        })
        .with("folders", |w: &Window| w.folders.clone());

    let window = Window {
        app: "Notes",
        document: Some("todo.txt".into()),
        flags: vec!["modified", "read-only"],
        count: 0,
        folders: Vec::new(),
    };

    let host = fields.bind(&window);
    for name in catalog.names() {
        println!("{name}: {:?}", catalog.render(name, &host)?);
    }

    Ok(())
}
