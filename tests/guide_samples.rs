//! Whole-guide tests over the curated samples in `samples/`

use runguide::guide::ast::{GroupKind, MenuSubType, Step, StepKind};
use runguide::guide::characters::Character;
use runguide::guide::config::ParserConfig;
use runguide::guide::loader::GuideError;
use runguide::guide::parsing::ParseError;
use runguide::guide::testing::{assert_guide, GuideSamples};

#[test]
fn test_loot_and_purchase_sample() {
    let guide = GuideSamples::parse("010-loot-purchase.txt");

    assert_guide(&guide)
        .game("Clair Obscur")
        .category("Any% Glitchless")
        .group_count(3)
        .group(0, |group| {
            group
                .id(1)
                .kind(GroupKind::Loot)
                .title("📦 Loot")
                .step_count(1)
                .step(0, |step| {
                    step.kind(StepKind::Loot)
                        .items(&["Potion de soin", "Chroma", "Pictos Vigueur"])
                        .label("Potion de soin | Chroma | Pictos Vigueur");
                });
        })
        .group(1, |group| {
            group
                .id(2)
                .kind(GroupKind::Purchase)
                .title("💰 Achat")
                .step_count(2)
                .step(0, |step| {
                    step.items(&["Teinture Lumière", "Arme Lanceram"]);
                })
                .step(1, |step| {
                    step.items(&["Chroma poli"]);
                });
        })
        .group(2, |group| {
            group.kind(GroupKind::Loot).step_count(1).step(0, |step| {
                step.items(&["Lumina Colère"]).image_count(1);
            });
        });
}

#[test]
fn test_combat_sample() {
    let guide = GuideSamples::parse("020-combat.txt");

    assert_guide(&guide)
        .group_count(2)
        .group(0, |group| {
            group
                .kind(GroupKind::Combat)
                .title("🛡️ Sentinelle")
                .step(0, |step| {
                    step.kind(StepKind::Combat).turn_count(3);
                });
        })
        .group(1, |group| {
            group
                .kind(GroupKind::Mixte)
                .title("🎯📦")
                .step_count(2)
                .step(0, |step| {
                    step.kind(StepKind::Boss).label("🎯 Évêque").turn_count(4);
                })
                .step(1, |step| {
                    step.kind(StepKind::Loot).items(&["Clé de l'Évêque"]);
                });
        });

    let Step::Combat(sentinelle) = &guide.action_groups[0].steps[0] else {
        panic!("expected a combat step");
    };
    let first = &sentinelle.turns[0];
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].character, Some(Character::Verso));
    assert_eq!(first[1].action, "Foudre");
    assert_eq!(sentinelle.turns[1][0].action, "PARRY x3");
    assert_eq!(sentinelle.turns[1][0].character, None);
    assert!(sentinelle.turns[2][0].fail);
    assert!(!sentinelle.turns[2][1].fail);

    let Step::Boss(eveque) = &guide.action_groups[1].steps[0] else {
        panic!("expected a boss step");
    };
    assert!(eveque.turns[0][0].is_note);
    assert_eq!(eveque.turns[1][1].action, "Attaque");
    assert!(eveque.turns[1][1].fail);
    assert!(eveque.turns[2][0].is_image);
    assert_eq!(eveque.turns[2][0].action, "eveque_phase2.png");
    assert_eq!(eveque.turns[2][0].character, Some(Character::Sciel));
    assert_eq!(eveque.action_turns().count(), 2);
}

#[test]
fn test_menu_sample() {
    let guide = GuideSamples::parse("030-menus.txt");

    assert_guide(&guide)
        .group_count(3)
        .group(0, |group| {
            group.kind(GroupKind::Menu).title("⚙️ Menu").step(0, |step| {
                step.label("Menu Stats + Sorts")
                    .action_count(5)
                    .menu_order(&[MenuSubType::Stat, MenuSubType::Sort]);
            });
        })
        .group(1, |group| {
            group.kind(GroupKind::Menu).step_count(1).step(0, |step| {
                step.action_count(5).menu_order(&[
                    MenuSubType::Arme,
                    MenuSubType::UpArme,
                    MenuSubType::UpLumina,
                ]);
            });
        })
        .group(2, |group| {
            group.step(0, |step| {
                step.label("Formation")
                    .action_count(2)
                    .menu_order(&[MenuSubType::Formation]);
            });
        });

    let Step::Menu(stats) = &guide.action_groups[0].steps[0] else {
        panic!("expected a menu step");
    };
    // "(V) +9 Force (9), +2 Esprit (5)": the second entry is Verso's too.
    assert_eq!(stats.actions[1].action, "+2 Esprit (5)");
    assert_eq!(stats.actions[1].character, Some(Character::Verso));
    // "(L) Foudre (1), Soin (2)"
    assert_eq!(stats.actions[4].character, Some(Character::Lune));

    let Step::Menu(equipment) = &guide.action_groups[1].steps[0] else {
        panic!("expected a menu step");
    };
    assert_eq!(equipment.actions[0].action, "Équiper avant le boss");
    assert_eq!(equipment.actions[0].character, None);
}

#[test]
fn test_context_sample() {
    let guide = GuideSamples::parse("040-context.txt");

    assert_guide(&guide)
        .group_count(3)
        .group(0, |group| {
            group
                .acte("Act I")
                .chapitre("Prologue")
                .kind(GroupKind::Mixte)
                .title("💡📦")
                .step(1, |step| {
                    step.chapitre(Some("Prologue"));
                });
        })
        .group(1, |group| {
            group
                .acte("Act I")
                .chapitre("Lumière")
                .kind(GroupKind::Combat);
        })
        .group(2, |group| {
            // A new act keeps the chapter in force.
            group
                .acte("Act II")
                .chapitre("Lumière")
                .kind(GroupKind::Image)
                .title("🖼️ Image");
        });

    let chapters: Vec<_> = guide.chapters().into_iter().map(|c| c.name).collect();
    assert_eq!(chapters, ["Prologue", "Lumière"]);
}

#[test]
fn test_context_sample_with_headings() {
    let config = ParserConfig {
        headings: true,
        ..ParserConfig::default()
    };
    let guide = GuideSamples::parse_with("040-context.txt", &config).unwrap();

    assert_guide(&guide).group(0, |group| {
        group
            .step_count(4)
            .step(0, |step| {
                step.kind(StepKind::Act).label("Act I");
            })
            .step(1, |step| {
                step.kind(StepKind::Chapter).label("Prologue");
            });
    });
}

#[test]
fn test_malformed_sample_is_lenient_by_default() {
    let guide = GuideSamples::parse("900-malformed.txt");

    assert_guide(&guide)
        .group_count(3)
        .group(0, |group| {
            group.kind(GroupKind::Loot);
        })
        .group(1, |group| {
            group.kind(GroupKind::Combat).step(0, |step| {
                step.turn_count(1);
            });
        })
        .group(2, |group| {
            group.kind(GroupKind::Menu).step(0, |step| {
                step.action_count(1);
            });
        });

    let Step::Menu(menu) = &guide.action_groups[2].steps[0] else {
        panic!("expected a menu step");
    };
    assert_eq!(menu.actions[0].action, "Force plus neuf");
    assert_eq!(menu.actions[0].detail, None);
}

#[test]
fn test_malformed_sample_fails_strictly() {
    let err = GuideSamples::parse_with("900-malformed.txt", &ParserConfig::strict()).unwrap_err();
    match err {
        GuideError::Parse(ParseError::Grammar { line, content, .. }) => {
            assert_eq!(line, 4);
            assert_eq!(content, "Texte sans marqueur");
        }
        other => panic!("expected a grammar error, got {other}"),
    }
}

#[test]
fn test_well_formed_samples_parse_strictly() {
    for name in GuideSamples::names().filter(|name| !name.starts_with("900")) {
        let strict = GuideSamples::parse_with(name, &ParserConfig::strict())
            .unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(strict, GuideSamples::parse(name), "{name}");
    }
}

#[test]
fn test_samples_validate() {
    for name in GuideSamples::names() {
        GuideSamples::parse(name)
            .validate()
            .unwrap_or_else(|e| panic!("{name}: {e}"));
    }
}
