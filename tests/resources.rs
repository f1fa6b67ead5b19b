mod common;

use common::{write_png, Harness};
use piccolo::engine::resources::{load_image, Placeholder, ResourceManager};
use piccolo::game::scene::Scene;

#[test]
fn test_decodes_real_images() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("graphics/hotel/entrance_normal.png"), 64, 32);
    let mut resources = ResourceManager::new(dir.path());

    let handle = resources.load_texture("graphics/hotel/entrance_normal.png", Placeholder::default());

    assert_eq!((handle.width, handle.height), (64, 32));
    let texture = resources.texture(handle.id).unwrap();
    assert_eq!(texture.key, "graphics/hotel/entrance_normal.png");
    assert_eq!(texture.image.dimensions(), (64, 32));
}

#[test]
fn test_missing_image_falls_back_to_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let mut resources = ResourceManager::new(dir.path());
    let placeholder = Placeholder::new((177, 156, 217), (50, 80));

    let handle = resources.load_texture("graphics/player/missing.png", placeholder);

    assert_eq!((handle.width, handle.height), (50, 80));
    let texture = resources.texture(handle.id).unwrap();
    assert_eq!(texture.image.get_pixel(10, 10).0, [177, 156, 217, 255]);
}

#[test]
fn test_unreadable_image_falls_back_to_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"not a png").unwrap();

    let loaded = load_image(&path, Placeholder::default());

    assert!(loaded.is_placeholder());
    assert_eq!(loaded.into_image().dimensions(), (100, 100));
}

#[test]
fn test_placeholders_are_shared() {
    let dir = tempfile::tempdir().unwrap();
    let mut resources = ResourceManager::new(dir.path());
    let placeholder = Placeholder::default();

    let a = resources.load_texture("a.png", placeholder);
    let b = resources.load_texture("b.png", placeholder);
    let c = resources.load_texture("c.png", Placeholder::new((1, 2, 3), (4, 5)));

    assert_eq!(a, b);
    assert_ne!(a.id, c.id);
    assert_eq!(resources.texture_count(), 2);
}

#[test]
fn test_repeated_keys_hit_the_cache() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("sprite.png"), 8, 8);
    let mut resources = ResourceManager::new(dir.path());

    let first = resources.load_texture("sprite.png", Placeholder::default());
    let second = resources.load_texture("sprite.png", Placeholder::default());

    assert_eq!(first, second);
    assert_eq!(resources.texture_count(), 1);
}

#[test]
fn test_every_scene_has_layers() {
    let h = Harness::new();

    for scene in Scene::all() {
        let layers = h.game.background.layers(scene).unwrap();
        assert_eq!((layers.ground.width, layers.ground.height), (800, 80));
        assert_eq!((layers.sky.width, layers.sky.height), (800, 440));
    }
}

#[test]
fn test_hotel_placeholders_are_shared_across_scenes() {
    let h = Harness::new();

    let corridor_a = h.game.background.layers(Scene::corridor(1, 3).unwrap()).unwrap();
    let corridor_b = h.game.background.layers(Scene::corridor(4, 9).unwrap()).unwrap();
    let entrance = h.game.background.layers(Scene::Entrance).unwrap();

    assert_eq!(corridor_a, corridor_b);
    assert_ne!(corridor_a.sky, entrance.sky);
    assert_ne!(corridor_a.ground, entrance.ground);

    // Eight player poses, two ground tints, eight sky tints.
    assert_eq!(h.resources.texture_count(), 18);
}

#[test]
fn test_player_placeholder_without_sprites() {
    let dir = tempfile::tempdir().unwrap();
    let mut resources = ResourceManager::new(dir.path());
    let game = piccolo::PiccoloGame::new(&piccolo::GameConfig::default(), &mut resources);

    let rect = game.player.rect();
    assert_eq!((rect.width, rect.height), (50.0, 80.0));
    assert_eq!(game.player.right.stand, game.player.left.walking[1]);
}
