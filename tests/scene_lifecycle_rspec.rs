//! Behavioural test: mounting builds the crowd, unmounting leaves nothing
//! behind.

#[path = "support/rspec_runner.rs"]
mod rspec_runner;

#[path = "support/scene_fixture.rs"]
mod scene_fixture;

use lookaway::roster::DEFAULT_ROSTER;
use lookaway::{AnimationMode, SceneHandle, SceneVariant};
use rspec::block::Context as Scenario;
use rspec_runner::run_serial;
use scene_fixture::SceneFixture;
use test_utils::scene::{character_count, entity_count, root_count};

#[derive(Debug, Clone)]
struct LifecycleFixture {
    scene: SceneFixture,
    baseline: usize,
}

impl LifecycleFixture {
    fn bootstrap() -> Self {
        let scene = SceneFixture::headless();
        let baseline = entity_count(&mut scene.app());
        Self { scene, baseline }
    }

    fn mode(&self) -> Option<AnimationMode> {
        self.scene
            .app()
            .world()
            .get_resource::<SceneHandle>()
            .map(SceneHandle::mode)
    }

    fn counts(&self) -> (usize, usize, usize) {
        let mut app = self.scene.app();
        (
            root_count(&mut app),
            character_count(&mut app),
            entity_count(&mut app),
        )
    }
}

#[test]
fn scene_mounts_once_and_unmounts_cleanly() {
    let roster = DEFAULT_ROSTER.len();

    run_serial(&rspec::given(
        "a headless app with no scene",
        LifecycleFixture::bootstrap(),
        |scenario: &mut Scenario<LifecycleFixture>| {
            scenario.then("no scene handle exists", |fixture| {
                assert_eq!(fixture.mode(), None);
            });

            scenario.when("a procedural scene is mounted", |ctx| {
                ctx.before_all(|fixture| {
                    fixture.scene.mount(SceneVariant::Procedural);
                    fixture.scene.tick(5);
                });

                ctx.then("one root holds the whole roster", move |fixture| {
                    let (roots, characters, _) = fixture.counts();
                    assert_eq!((roots, characters), (1, roster));
                });

                ctx.then("the scene tracks the pointer", |fixture| {
                    assert_eq!(fixture.mode(), Some(AnimationMode::Tracking));
                });
            });

            scenario.when("a preset scene is requested on top", |ctx| {
                ctx.before_all(|fixture| {
                    fixture.scene.mount(SceneVariant::Preset);
                    fixture.scene.tick(1);
                });

                ctx.then("the first scene stays mounted alone", move |fixture| {
                    let (roots, characters, _) = fixture.counts();
                    assert_eq!((roots, characters), (1, roster));
                    assert_eq!(fixture.mode(), Some(AnimationMode::Tracking));
                });
            });

            scenario.when("the scene is unmounted and time passes", |ctx| {
                ctx.before_all(|fixture| {
                    fixture.scene.unmount();
                    fixture.scene.tick(10);
                });

                ctx.then("the handle is gone", |fixture| {
                    assert_eq!(fixture.mode(), None);
                });

                ctx.then("every scene entity is despawned", |fixture| {
                    assert_eq!(fixture.counts(), (0, 0, fixture.baseline));
                });
            });

            scenario.when("a preset scene is mounted afterwards", |ctx| {
                ctx.before_all(|fixture| {
                    fixture.scene.mount(SceneVariant::Preset);
                    fixture.scene.tick(1);
                });

                ctx.then("it negotiates preset mode", |fixture| {
                    assert_eq!(fixture.mode(), Some(AnimationMode::Preset));
                });
            });
        },
    ));
}
