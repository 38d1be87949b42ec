use log::{Level, LevelFilter, Log, Metadata, Record};
use pixel_font::{
    asset::{Asset, AssetState, FontAssetManager},
    font::{BitmapFont, FntConfig, FontDefEntry, GlyphDefinition, GlyphRect, LoadOutcome, SpriteFrame},
};
use std::{cell::RefCell, rc::Rc, sync::Once};

// Each test runs on its own thread, so warnings are collected per thread.
thread_local! {
    static WARNINGS: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if record.level() == Level::Warn {
            WARNINGS.with(|w| w.borrow_mut().push(record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

fn take_warnings() -> Vec<String> {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Warn);
    });
    WARNINGS.with(|w| std::mem::take(&mut *w.borrow_mut()))
}

#[derive(Debug)]
struct Texture {
    name: &'static str,
}

fn config(entries: &[(u32, FontDefEntry)]) -> FntConfig {
    let mut cfg = FntConfig::default();
    for (k, e) in entries {
        cfg.font_def_dictionary.insert(*k, *e);
    }
    cfg
}

fn glyph_a() -> FontDefEntry {
    FontDefEntry {
        rect: GlyphRect::new(0.0, 0.0, 10.0, 12.0),
        x_offset: 1.0,
        y_offset: 2.0,
        x_advance: 11.0,
    }
}

#[test]
fn test_load_glyph_a() {
    let tex = Rc::new(Texture { name: "pixel.png" });
    let mut font = BitmapFont::new()
        .with_sprite_frame(SpriteFrame::new(tex.clone()))
        .with_fnt_config(config(&[(65, glyph_a())]));

    assert_eq!(font.on_loaded(), LoadOutcome::Populated(1));
    assert_eq!(font.state(), AssetState::Loaded);

    let atlas = font.font_def_dictionary().unwrap();
    let a = atlas.get_definition_for_char('A').unwrap();
    assert_eq!(
        *a,
        GlyphDefinition {
            u: 0.0,
            v: 0.0,
            w: 10.0,
            h: 12.0,
            offset_x: 1.0,
            offset_y: 2.0,
            texture_id: 0,
            valid: true,
            x_advance: 11.0,
        }
    );
    assert_eq!(atlas.get_definition(65), Some(a));
    assert_eq!(atlas.get_texture().unwrap().name, "pixel.png");
    assert!(Rc::ptr_eq(atlas.get_texture().unwrap(), &tex));
}

#[test]
fn test_load_without_config_warns_once() {
    take_warnings();
    let mut font = BitmapFont::new().with_sprite_frame(SpriteFrame::new(Rc::new(Texture { name: "t" })));

    assert_eq!(font.on_loaded(), LoadOutcome::MissingConfig);

    let warnings = take_warnings();
    assert_eq!(warnings.len(), 1, "{:?}", warnings);
    assert!(warnings[0].contains("fnt config"));
    let atlas = font.font_def_dictionary().unwrap();
    assert!(atlas.is_empty());
    assert!(atlas.get_definition_for_char('A').is_none());
}

#[test]
fn test_missing_config_keeps_previous_glyphs() {
    let mut font = BitmapFont::new()
        .with_sprite_frame(SpriteFrame::new(Rc::new(Texture { name: "t" })))
        .with_fnt_config(config(&[(65, glyph_a())]));
    font.on_loaded();

    font.set_fnt_config(None);
    take_warnings();
    assert_eq!(font.on_loaded(), LoadOutcome::MissingConfig);
    assert_eq!(take_warnings().len(), 1);
    assert!(font.get_definition_for_char('A').is_some());
}

#[test]
fn test_reload_keeps_stale_glyphs() {
    let mut font = BitmapFont::new()
        .with_sprite_frame(SpriteFrame::new(Rc::new(Texture { name: "t" })))
        .with_fnt_config(config(&[(65, glyph_a()), (66, glyph_a())]));
    assert_eq!(font.on_loaded(), LoadOutcome::Populated(2));

    let mut b = glyph_a();
    b.x_advance = 20.0;
    font.set_fnt_config(Some(config(&[(65, b)])));
    assert_eq!(font.on_loaded(), LoadOutcome::Populated(1));

    // 'A' is re-derived from the new config
    assert_eq!(font.get_definition_for_char('A').unwrap().x_advance, 20.0);
    // 'B' is not in the new config but is still served (known stale entry)
    let stale = font.get_definition_for_char('B').unwrap();
    assert_eq!(stale.x_advance, 11.0);
    assert!(stale.valid);
    assert_eq!(font.font_def_dictionary().unwrap().len(), 2);
}

#[test]
fn test_config_keys_are_kept_verbatim() {
    // a font whose ids are glyph indices, not code points
    let mut font = BitmapFont::new()
        .with_sprite_frame(SpriteFrame::new(Rc::new(Texture { name: "t" })))
        .with_fnt_config(config(&[(0, glyph_a()), (1, glyph_a())]));
    font.on_loaded();

    let atlas = font.font_def_dictionary().unwrap();
    assert!(atlas.get_definition(1).is_some());
    assert!(atlas.get_definition_for_char('1').is_none());
    assert!(atlas.get_definition_for_char('A').is_none());
    assert_eq!(atlas.lookup_misses(), 2);
}

#[test]
fn test_clone_definitions_independent_of_font() {
    let mut font = BitmapFont::new()
        .with_sprite_frame(SpriteFrame::new(Rc::new(Texture { name: "t" })))
        .with_fnt_config(config(&[(65, glyph_a())]));
    font.on_loaded();

    let mut copy = font.font_def_dictionary().unwrap().clone_definitions();
    copy.get_mut(&65).unwrap().w = 1.0;
    assert_eq!(font.get_definition(65).unwrap().w, 10.0);

    let atlas = font.font_def_dictionary_mut().unwrap();
    let mut changed = *atlas.get_definition(65).unwrap();
    changed.h = 99.0;
    atlas.add_definition(65, changed);
    assert_eq!(copy[&65].h, 12.0);
}

#[test]
fn test_load_fnt_file() {
    let path = format!("{}/assets/font/pixel.fnt", env!("CARGO_MANIFEST_DIR"));
    let tex = Rc::new(Texture { name: "pixel.png" });
    let mut am = FontAssetManager::new();
    let font = am.load_file(&path, Some(SpriteFrame::new(tex.clone()))).unwrap();

    assert_eq!(font.font_size, 16);
    let cfg = font.fnt_config.as_ref().unwrap();
    assert_eq!(cfg.common_height, 18.0);
    assert_eq!(cfg.atlas_name, "pixel.png");

    let zh = font.get_definition_for_char('中').unwrap();
    assert_eq!((zh.u, zh.w, zh.x_advance), (21.0, 16.0, 17.0));
    assert_eq!(font.get_definition_for_char(' ').unwrap().x_advance, 5.0);
    assert!(font.get_definition_for_char('C').is_none());
    assert_eq!(font.font_def_dictionary().unwrap().len(), 5);

    assert!(am.get(&path).is_some());
    assert_eq!(am.load_file(&path, None).unwrap().font_size, 16);
    assert_eq!(am.len(), 1);
}

#[test]
fn test_clear_then_reload() {
    let tex = Rc::new(Texture { name: "t" });
    let mut font = BitmapFont::with_location("mem.fnt").with_sprite_frame(SpriteFrame::new(tex.clone()));
    font.set_data(b"char id=65 x=0 y=0 width=10 height=12 xoffset=1 yoffset=2 xadvance=11\n");
    font.parse().unwrap();

    font.font_def_dictionary_mut().unwrap().clear();
    assert!(font.get_definition_for_char('A').is_none());
    assert!(Rc::ptr_eq(font.font_def_dictionary().unwrap().get_texture().unwrap(), &tex));

    assert_eq!(font.on_loaded(), LoadOutcome::Populated(1));
    assert_eq!(font.get_definition_for_char('A').unwrap().w, 10.0);
}
