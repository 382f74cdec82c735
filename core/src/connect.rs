//! The Connect Questionnaire
//!
//! Baseline catalog for the lead-capture flow: six prefix steps, four
//! role branches, four suffix steps ending in the terminal thank-you.
//! The `role` field is the discriminator; it is single-select, so at
//! most one branch is ever active.

use crate::catalog::Catalog;
use crate::field::Field;
use crate::step::Step;

pub const ROLE_BUILDER: &str = "I can do code / engineering";
pub const ROLE_RESEARCHER: &str = "I am a researcher";
pub const ROLE_PROJECT: &str = "I want to partner with my existing project";
pub const ROLE_GOVERNANCE: &str = "Interested in the governance";

/// Build the Connect questionnaire catalog.
pub fn connect_catalog() -> Catalog {
    Catalog::new("role")
        .prefix_step(Step::intro("intro").with_button("Let's connect"))
        .prefix_step(Step::content(
            "identity1",
            "About you",
            vec![
                Field::text("name")
                    .with_label("Full Name")
                    .with_placeholder("Jane Doe"),
                Field::email("email")
                    .with_label("Email Address")
                    .with_placeholder("you@example.com"),
                Field::text("phone")
                    .optional()
                    .with_label("Phone (Signal / Telegram)")
                    .with_placeholder("+1 555 0123"),
            ],
        ))
        .prefix_step(Step::content(
            "interests",
            "What are you interested in?",
            vec![Field::multi_choice(
                "interests",
                &[
                    "Grants / Funding",
                    "Alignment Council",
                    "Networking",
                    "Research / Collaborations",
                    "Partnership",
                ],
            )],
        ))
        .prefix_step(Step::content(
            "identity2",
            "Main area",
            vec![
                Field::text("location")
                    .with_label("Primary Location")
                    .with_placeholder("City, Timezone"),
                Field::text("affiliations")
                    .optional()
                    .with_label("Current Affiliations")
                    .with_placeholder("University, Lab, Company, or DAO"),
            ],
        ))
        .prefix_step(Step::content(
            "identity3",
            "About you",
            vec![
                Field::multi_text("socialLinks", 3)
                    .with_label("Links")
                    .with_placeholder("https://x.com/handle"),
                Field::text_area("achievements")
                    .optional()
                    .with_label("Key Achievements / Benchmarks")
                    .with_placeholder("Notable breakthroughs, benchmarks, publications..."),
                Field::text("grantsAwards")
                    .optional()
                    .with_label("Previous Grants or Awards")
                    .with_placeholder("e.g. NSF Grant, Ethereum Foundation, Best Paper Award"),
                Field::text_area("bio")
                    .with_label("Short Bio")
                    .with_placeholder("2-3 sentences about your background."),
            ],
        ))
        .prefix_step(Step::content(
            "role",
            "How can you contribute?",
            vec![Field::choice(
                "role",
                &[ROLE_BUILDER, ROLE_RESEARCHER, ROLE_PROJECT, ROLE_GOVERNANCE],
            )],
        ))
        .branch(
            ROLE_BUILDER,
            vec![
                Step::content(
                    "branch_builder_1",
                    "What represents your primary stack?",
                    vec![Field::multi_choice(
                        "stack",
                        &[
                            "Distributed Systems / P2P (Rust, Go, Libp2p)",
                            "AI Engineering (Python, CUDA, Mojo)",
                            "Smart Contracts / VM",
                            "Full-stack / Frontend",
                        ],
                    )],
                ),
                Step::content(
                    "branch_builder_2",
                    "Share your work",
                    vec![
                        Field::multi_text("portfolio", 3)
                            .with_label("Work URLs")
                            .with_placeholder("Work URL"),
                    ],
                ),
            ],
        )
        .branch(
            ROLE_RESEARCHER,
            vec![
                Step::content(
                    "branch_researcher_1",
                    "What is your research focus?",
                    vec![Field::multi_choice(
                        "researchFocus",
                        &[
                            "AI Safety & Alignment",
                            "Cryptography & Zero-Knowledge",
                            "Game Theory & Mechanism Design",
                            "Complex Systems / Emergence",
                        ],
                    )],
                ),
                Step::content(
                    "branch_researcher_2",
                    "Share your work",
                    vec![
                        Field::multi_text("publication", 3)
                            .with_label("Work URLs")
                            .with_placeholder("Work URL"),
                    ],
                ),
            ],
        )
        .branch(
            ROLE_PROJECT,
            vec![
                Step::content(
                    "branch_project_1",
                    "Tell us about your project",
                    vec![
                        Field::text("projectLink")
                            .with_label("Project Link")
                            .with_placeholder("https://yourproject.com"),
                        Field::text_area("projectDescription")
                            .with_label("Description")
                            .with_placeholder("Briefly describe your project..."),
                    ],
                ),
                Step::content(
                    "branch_project_2",
                    "What stage is the project?",
                    vec![Field::choice(
                        "projectStage",
                        &["Idea / Whitepaper", "MVP / Testnet", "Live / Mainnet"],
                    )],
                ),
            ],
        )
        .branch(
            ROLE_GOVERNANCE,
            vec![Step::content(
                "branch_governance_1",
                "Specific governance interests",
                vec![Field::multi_choice(
                    "govInterests",
                    &[
                        "DAO Operations & Voting",
                        "Tokenomics & Policy",
                        "Community Building",
                        "Event Organizing",
                    ],
                )],
            )],
        )
        .suffix_step(Step::content(
            "cultural",
            "What do you think about open protocols?",
            vec![Field::choice(
                "culturalFilter",
                &[
                    "I'm an insider and can discern real protocols from vaporware",
                    "I don't know much but I'm curious",
                    "AI should be centralized and controlled by 5 companies",
                ],
            )],
        ))
        .suffix_step(Step::content(
            "referral",
            "Did someone refer you?",
            vec![
                Field::text("referral")
                    .optional()
                    .with_label("Who referred you?")
                    .with_placeholder("Name or handle"),
            ],
        ))
        .suffix_step(
            Step::content(
                "notes",
                "Anything else?",
                vec![
                    Field::text_area("notes")
                        .optional()
                        .with_label("Additional notes")
                        .with_placeholder("Anything you'd like to add..."),
                ],
            )
            .with_button("Submit"),
        )
        .suffix_step(Step::terminal("thankyou"))
}
