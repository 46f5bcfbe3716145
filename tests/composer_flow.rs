use viral_prompt_gen::{
    build_preview, generate_variations, tips, ComposerError, HookCategory, Platform, ScriptedRandom,
    SeededRandom, Selection, Session, Slot,
};

fn example_selection() -> Selection {
    let mut sel = Selection::new();
    sel.platform = Some(Platform::TikTok);
    sel.set_hook(HookCategory::Curiosity, "The secret behind").unwrap();
    sel.set(Slot::ShotType, "Close-up").unwrap();
    sel.set(Slot::Subject, "Young entrepreneur").unwrap();
    sel.set(Slot::Action, "Demonstrates technique").unwrap();
    sel.set(Slot::Setting, "Cozy home workshop").unwrap();
    sel.set(Slot::CameraMovement, "Smooth dolly push-in").unwrap();
    sel.set(Slot::Audio, "Upbeat motivational music").unwrap();
    sel
}

#[test]
fn end_to_end_preview_matches_example() {
    let sel = example_selection();
    assert!(sel.is_complete());
    assert_eq!(
        build_preview(&sel).as_deref(),
        Some(
            "The secret behind, Close-up, Young entrepreneur, Demonstrates technique, \
             Cozy home workshop, Smooth dolly push-in, Upbeat motivational music"
        )
    );
}

#[test]
fn variation_errors_are_reported() {
    let sel = example_selection();
    assert!(matches!(
        generate_variations(&sel, -3, &mut SeededRandom::new(1)),
        Err(ComposerError::InvalidArgument(_))
    ));
    assert!(matches!(
        generate_variations(&Selection::new(), 5, &mut SeededRandom::new(1)),
        Err(ComposerError::IncompletePrompt)
    ));
}

#[test]
fn scripted_variations_are_exact() {
    let sel = example_selection();
    let mut rng = ScriptedRandom::new(vec![7, 9, 5, 11, 5, 5]);
    let out = generate_variations(&sel, 2, &mut rng).unwrap();
    assert_eq!(out.len(), 2);
    for p in &out {
        assert_eq!(
            p.text,
            "The secret behind Split screen Artistic creation Breaks conventional rule \
             in Dramatic rooftop, Steady focus pull, Vintage jazz undertones"
        );
        assert_eq!(p.hook_category, Some(HookCategory::Curiosity));
        assert_eq!(p.platform, Some(Platform::TikTok));
    }
    assert_ne!(out[0].id, out[1].id);
}

#[test]
fn session_save_delete_list_order() {
    let mut session = Session::new();
    session.selection = example_selection();
    let ids: Vec<_> = session
        .generate(3, &mut SeededRandom::new(11))
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();

    for id in &ids {
        assert!(session.save(*id));
    }
    assert!(!session.save(ids[1]));
    assert_eq!(session.saved().len(), 3);

    assert!(session.delete(ids[1]));
    assert!(!session.delete(ids[1]));
    let left: Vec<_> = session.saved().iter().map(|s| s.prompt.id).collect();
    assert_eq!(left, vec![ids[0], ids[2]]);
}

#[test]
fn platform_tips_lookup() {
    assert_eq!(tips("tiktok").unwrap().duration, "15-30 seconds");
    assert!(matches!(tips("snapchat"), Err(ComposerError::UnknownPlatform(_))));
}
