//! Sample data seeding.
//!
//! Populates a fresh repository with a handful of authors and courses
//! so the API is explorable out of the box. Ids are fixed so requests
//! in docs and manual tests stay valid across restarts.

use chrono::NaiveDate;
use courselib_application::ports::repository::{CourseLibraryRepository, RepositoryError};
use courselib_domain::{Author, AuthorId, Course, CourseId};
use tracing::info;
use uuid::Uuid;

fn author(
    id: u128,
    first_name: &str,
    last_name: &str,
    (year, month, day): (i32, u32, u32),
    main_category: &str,
) -> Author {
    Author {
        id: AuthorId::new(Uuid::from_u128(id)),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        // The date literals are static and in range.
        date_of_birth: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        main_category: main_category.to_string(),
    }
}

fn course(id: u128, author: &Author, title: &str, description: &str) -> Course {
    Course {
        id: CourseId::new(Uuid::from_u128(id)),
        title: title.to_string(),
        description: Some(description.to_string()),
        author_id: author.id,
    }
}

/// Seeds the sample authors and courses and commits them.
pub async fn seed_sample_data(
    repository: &dyn CourseLibraryRepository,
) -> Result<(), RepositoryError> {
    let berry = author(
        0xd28888e9_2ba9_473a_a40f_e38cb54f9b35,
        "Berry",
        "Griffin Beak Eldritch",
        (1650, 7, 23),
        "Ships",
    );
    let nancy = author(
        0xda2fd609_d754_4feb_8acd_c4f9ff13ba96,
        "Nancy",
        "Swashbuckler Rye",
        (1668, 5, 21),
        "Rum",
    );
    let eli = author(
        0x2902b665_1190_4c70_9915_b9c2d7680450,
        "Eli",
        "Ivory Bones Sweet",
        (1701, 12, 16),
        "Singing",
    );
    let arnold = author(
        0x102b566b_ba1f_404c_b2df_e2cde39ade09,
        "Arnold",
        "The Unseen Stafford",
        (1702, 3, 6),
        "Singing",
    );
    let seabury = author(
        0x5b3621c0_7b12_4e80_9c8b_3398cba7ee05,
        "Seabury",
        "Toxic Reyson",
        (1690, 11, 23),
        "Maps",
    );

    let groups = vec![
        (
            berry.clone(),
            vec![course(
                0x5b1c2b4d_48c7_402a_80c3_cc796ad49c6b,
                &berry,
                "Commandeering a Ship Without Getting Caught",
                "Commandeering a ship in rough waters isn't easy; doing it without getting caught is even harder.",
            )],
        ),
        (
            nancy.clone(),
            vec![course(
                0xd8663e5e_7494_4f81_8739_6e0de1bea7ee,
                &nancy,
                "Overthrowing Mutiny",
                "In this course you'll learn how to overthrow that pesky mutiny.",
            )],
        ),
        (
            eli.clone(),
            vec![course(
                0xd173e20d_159e_4127_9ce9_b0ac2564ad97,
                &eli,
                "Avoiding Brawls While Singing as a Pirate",
                "Every good pirate loves to sing, but doing so without getting into a brawl takes practice.",
            )],
        ),
        (arnold, Vec::new()),
        (seabury, Vec::new()),
    ];

    let author_count = groups.len();
    let course_count = groups.iter().map(|(_, courses)| courses.len()).sum::<usize>();
    for (author, courses) in groups {
        repository.add_author(author, courses).await?;
    }
    repository.save().await?;

    info!(
        authors = author_count,
        courses = course_count,
        "Seeded sample data"
    );
    Ok(())
}
