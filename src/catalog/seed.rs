//! Built-in dataset: 20 films, 4 curated collections, one simulated user,
//! and the mood taxonomy. Fixed at build time; no runtime write path.

use chrono::NaiveDate;

use super::Catalog;
use crate::models::{
    Collection, Film, Genre, MonthlyActivity, MoodOption, UserData, UserRating, UserStats,
};

#[allow(clippy::too_many_arguments)]
fn film(
    id: &str,
    title: &str,
    year: u16,
    rating: f64,
    genre: Genre,
    director: &str,
    cast: &[&str],
    runtime: u32,
    ai_summary: &str,
    mood_tags: &[&str],
    poster_gradient: &str,
) -> Film {
    Film {
        id: id.to_string(),
        title: title.to_string(),
        year,
        rating,
        genre,
        director: director.to_string(),
        cast: cast.iter().map(|s| s.to_string()).collect(),
        runtime,
        ai_summary: ai_summary.to_string(),
        mood_tags: mood_tags.iter().map(|s| s.to_string()).collect(),
        poster_gradient: poster_gradient.to_string(),
    }
}

fn collection(id: &str, name: &str, description: &str, film_ids: &[&str]) -> Collection {
    Collection {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        film_ids: film_ids.iter().map(|s| s.to_string()).collect(),
    }
}

fn mood(id: &str, emoji: &str, label: &str, genres: &[Genre], description: &str) -> MoodOption {
    MoodOption {
        id: id.to_string(),
        emoji: emoji.to_string(),
        label: label.to_string(),
        genres: genres.to_vec(),
        description: description.to_string(),
    }
}

fn rating(film_id: &str, value: f64, date: &str) -> UserRating {
    UserRating {
        film_id: film_id.to_string(),
        rating: value,
        // Seed dates are fixed literals and always parse
        date_rated: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid seed date"),
    }
}

pub fn films() -> Vec<Film> {
    vec![
        film(
            "1",
            "Void Protocol",
            2024,
            4.7,
            Genre::SciFi,
            "Anya Novak",
            &["Marcus Dellacroix", "Leena Sato", "Viktor Holm", "Priya Nair"],
            148,
            "A quantum physicist discovers that reality is a layered simulation, each tier more hostile than the last. As she descends through recursive dimensions, the line between creator and creation dissolves into existential terror. A masterwork of cerebral science fiction that rewards multiple viewings.",
            &["mind-bending", "cerebral", "dystopian"],
            "linear-gradient(135deg, #1e1b4b 0%, #7c3aed 50%, #0f172a 100%)",
        ),
        film(
            "2",
            "The Last Meridian",
            2023,
            4.5,
            Genre::Drama,
            "Samuel Beaumont",
            &["Clara Fontaine", "Idris Kenyatta", "Maren Voss"],
            137,
            "Three strangers converge at the edge of a dying coastal town, each carrying secrets heavy enough to sink them. Their intersecting stories weave a tapestry of loss, redemption, and the quiet courage it takes to start again. Beaumont's direction is painterly and unhurried.",
            &["heartwarming", "contemplative", "bittersweet"],
            "linear-gradient(135deg, #1c1917 0%, #b45309 50%, #292524 100%)",
        ),
        film(
            "3",
            "Neon Ronin",
            2024,
            4.3,
            Genre::Action,
            "Kenji Takahashi",
            &["Ryo Tanaka", "Sofia Guerrero", "Dmitri Volkov", "Amara Osei"],
            126,
            "In a rain-soaked cyberpunk Tokyo, a disgraced bodyguard takes one final contract that plunges him into a war between rival AI corporations. Every frame pulses with neon-drenched choreography and philosophical weight. The action sequences alone redefine the genre.",
            &["intense", "stylish", "adrenaline"],
            "linear-gradient(135deg, #0c0a09 0%, #dc2626 50%, #1e1b4b 100%)",
        ),
        film(
            "4",
            "Sunlit Detour",
            2023,
            4.1,
            Genre::Comedy,
            "Margot Chevalier",
            &["Felix Andersson", "Luna Park", "Roberto Diaz"],
            104,
            "A perfectionist wedding planner accidentally ends up on the wrong flight and lands in a remote village where nothing goes according to plan—including falling for the local mechanic. A fizzy, sun-drenched comedy with genuine emotional depth beneath the laughs.",
            &["feel-good", "charming", "lighthearted"],
            "linear-gradient(135deg, #fef3c7 0%, #f59e0b 50%, #92400e 100%)",
        ),
        film(
            "5",
            "Hollow Saints",
            2024,
            4.8,
            Genre::Thriller,
            "Irina Volskaya",
            &["Caspian Rhys", "Nadia Petrova", "Oscar Lindgren", "Yuki Morimoto"],
            141,
            "A celebrated forensic psychologist realizes her latest patient's confessions mirror crimes that haven't happened yet. The deeper she investigates, the more her own past becomes the primary evidence. A labyrinthine thriller that trusts its audience's intelligence completely.",
            &["mind-bending", "intense", "dark"],
            "linear-gradient(135deg, #0f172a 0%, #475569 50%, #020617 100%)",
        ),
        film(
            "6",
            "The Bone Garden",
            2023,
            4.4,
            Genre::Horror,
            "Ezra Blackwell",
            &["Sienna Marsh", "Tobias Crane", "Lila Aronov"],
            118,
            "An archaeologist unearths a Victorian garden where the flowers grow from human remains—and the dead are not finished growing. Blackwell crafts atmospheric dread with patience, letting each revelation bloom into genuine, visceral horror. Not for the faint of heart.",
            &["spine-chilling", "atmospheric", "gothic"],
            "linear-gradient(135deg, #1a0f0f 0%, #7f1d1d 50%, #0a0a0a 100%)",
        ),
        film(
            "7",
            "Parallax Hearts",
            2024,
            4.2,
            Genre::Romance,
            "Elena Vasquez",
            &["Julian Cross", "Amira Hassan", "Theo Chen"],
            119,
            "Two rival architects competing for the same commission discover their anonymous online confidant is each other. A modern romance that understands the architecture of connection—how we build walls and, occasionally, doors. Witty, warm, and architecturally gorgeous.",
            &["heartwarming", "witty", "romantic"],
            "linear-gradient(135deg, #4c1d95 0%, #ec4899 50%, #7c2d12 100%)",
        ),
        film(
            "8",
            "Chromatic",
            2024,
            4.9,
            Genre::Animation,
            "Suki Hayashi",
            &["Voice: Iris Kwan", "Voice: Omar Sterling", "Voice: Fern Lightly"],
            98,
            "In a world where emotions manifest as colors, a young artist born in grayscale must paint her way to feeling. Hayashi's animation team creates visuals so stunning they redefine what the medium can achieve. A masterpiece of visual storytelling that speaks to every age.",
            &["visually-stunning", "emotional", "uplifting"],
            "linear-gradient(135deg, #312e81 0%, #6d28d9 30%, #2dd4bf 70%, #fbbf24 100%)",
        ),
        film(
            "9",
            "Signal Lost",
            2023,
            4.0,
            Genre::SciFi,
            "Marcus Webb",
            &["Stellan Dufresne", "Kira Nakamura", "Bodhi Patel", "Elsa Thornton"],
            155,
            "The crew of a deep-space relay station intercepts a message from a civilization that went extinct millennia ago—but the message is addressed to them by name. A slow-burn cosmic mystery that builds to a shattering climax about the nature of time and memory.",
            &["cerebral", "haunting", "epic"],
            "linear-gradient(135deg, #020617 0%, #1e3a5f 50%, #0d1b2a 100%)",
        ),
        film(
            "10",
            "Bitter Honey",
            2024,
            4.6,
            Genre::Drama,
            "Ousmane Diallo",
            &["Celeste Morin", "Kwame Asante", "Ingrid Solheim"],
            132,
            "A beekeeper in rural Senegal fights to save her ancestral land from a mining corporation, armed only with community bonds and stubborn grace. Diallo captures landscapes and faces with equal reverence, creating an intimate epic about what we owe the earth and each other.",
            &["inspiring", "contemplative", "powerful"],
            "linear-gradient(135deg, #422006 0%, #ca8a04 50%, #1c1917 100%)",
        ),
        film(
            "11",
            "Fracture State",
            2024,
            4.4,
            Genre::Action,
            "Nikolai Petrov",
            &["Axel Storm", "Zara Okonkwo", "Henrik Larsen"],
            134,
            "When a seismic weapon test goes wrong, a geological engineer and a special forces operative must cross a continent that is literally breaking apart. Petrov stages action at tectonic scale—cities splitting in real time—while keeping the human stakes intimate and urgent.",
            &["adrenaline", "epic", "intense"],
            "linear-gradient(135deg, #1e1e1e 0%, #ef4444 40%, #f97316 100%)",
        ),
        film(
            "12",
            "The Understudies",
            2023,
            3.9,
            Genre::Comedy,
            "Patrick Holloway",
            &["Bea Kingston", "Miles Okoro", "Tanya Bergström", "Raj Kapoor"],
            111,
            "Four chronically overlooked backup actors at a prestigious theater conspire to sabotage the leads and claim their spotlight. What begins as a screwball caper evolves into a surprisingly tender meditation on ambition, friendship, and the roles we play offstage.",
            &["feel-good", "witty", "charming"],
            "linear-gradient(135deg, #581c87 0%, #c084fc 50%, #fef08a 100%)",
        ),
        film(
            "13",
            "Whisperwood",
            2024,
            4.7,
            Genre::Horror,
            "Morrigan Falk",
            &["Hazel Brynn", "Corin Ashford", "Petra Engel"],
            123,
            "A folklore researcher retreats to an isolated Scandinavian forest to study ancient myths, only to discover the myths are studying her back. Falk builds terror through sound design and negative space, proving that what you don't see is infinitely more frightening.",
            &["spine-chilling", "atmospheric", "slow-burn"],
            "linear-gradient(135deg, #052e16 0%, #166534 50%, #0a0a0a 100%)",
        ),
        film(
            "14",
            "Daybreak Equation",
            2023,
            4.3,
            Genre::SciFi,
            "Anya Novak",
            &["Marcus Dellacroix", "Zhen Li", "Astrid Holm"],
            139,
            "A mathematician discovers an equation that predicts exactly when each person will have their most pivotal day. When she calculates her own, she has 72 hours to decide whether knowing the future is a gift or a prison. Novak's follow-up to Void Protocol is equally mesmerizing.",
            &["mind-bending", "philosophical", "emotional"],
            "linear-gradient(135deg, #0c4a6e 0%, #38bdf8 50%, #fef3c7 100%)",
        ),
        film(
            "15",
            "Velvet Reckoning",
            2024,
            4.5,
            Genre::Thriller,
            "Carmen Reyes",
            &["Dominic Ashworth", "Valentina Cruz", "Jasper Wren", "Mei Tanaka"],
            145,
            "A retired jewel thief is blackmailed into one last heist—stealing a painting from the private collection of the crime lord who betrayed her. Reyes directs with velvet precision, every scene draped in tension and impeccable style. The final act is a masterclass in misdirection.",
            &["stylish", "intense", "cerebral"],
            "linear-gradient(135deg, #2e1065 0%, #7c3aed 50%, #b91c1c 100%)",
        ),
        film(
            "16",
            "Paper Lanterns",
            2024,
            4.6,
            Genre::Romance,
            "Hana Mizuki",
            &["Sora Ito", "Gabriel Restrepo", "Chloe Beaumont"],
            115,
            "Two pen pals who've written to each other for a decade finally agree to meet at a lantern festival in Kyoto—but neither looks like the other expects. Mizuki crafts a love story illuminated by paper and firelight, where vulnerability becomes the most radical act of courage.",
            &["heartwarming", "romantic", "beautiful"],
            "linear-gradient(135deg, #7c2d12 0%, #fb923c 40%, #fde68a 100%)",
        ),
        film(
            "17",
            "Iron Chorus",
            2023,
            4.1,
            Genre::Action,
            "Kenji Takahashi",
            &["Ryo Tanaka", "Nia Okafor", "Sebastian Varga"],
            131,
            "In a near-future where sound is weaponized, a deaf soldier leads a rebellion using the one frequency the regime cannot control: silence. Takahashi inverts the action genre's sonic obsession to create something thrillingly original. The silent battle sequences are breathtaking.",
            &["intense", "original", "powerful"],
            "linear-gradient(135deg, #18181b 0%, #a1a1aa 40%, #3f3f46 100%)",
        ),
        film(
            "18",
            "The Cartographer's Dream",
            2024,
            4.8,
            Genre::Animation,
            "Luca Fontana",
            &["Voice: Pearl Adams", "Voice: Diego Santos", "Voice: Minako Abe"],
            106,
            "An elderly mapmaker discovers her childhood drawings have become a real, living world—one that's now in danger of being erased. Fontana blends hand-drawn and digital animation to create a universe of staggering beauty. A love letter to imagination and the maps we carry in our hearts.",
            &["visually-stunning", "emotional", "magical"],
            "linear-gradient(135deg, #1e3a5f 0%, #0ea5e9 40%, #fcd34d 70%, #6d28d9 100%)",
        ),
        film(
            "19",
            "Cold Geometry",
            2023,
            4.2,
            Genre::Thriller,
            "Henrik Strand",
            &["Elsa Thornton", "Viktor Holm", "Nadia Petrova"],
            128,
            "An architect realizes her award-winning building was designed to be a trap—and the first tenants are moving in tomorrow. Strand constructs suspense with the precision of a blueprint, where every corridor leads deeper into paranoia. Claustrophobia has never been so elegantly rendered.",
            &["cerebral", "tense", "dark"],
            "linear-gradient(135deg, #0f172a 0%, #64748b 50%, #1e293b 100%)",
        ),
        film(
            "20",
            "Monsoon Wedding Crashers",
            2024,
            3.8,
            Genre::Comedy,
            "Anika Sharma",
            &["Dev Patel Jr.", "Fatima Al-Rashid", "Leo Marchetti", "Priya Nair"],
            108,
            "Three best friends accidentally RSVP to the wrong destination wedding and decide to play along rather than admit their mistake. As the monsoon rolls in and secrets pour out, chaos becomes the best wedding gift of all. A riotous ensemble comedy with genuine heart.",
            &["hilarious", "feel-good", "chaotic"],
            "linear-gradient(135deg, #365314 0%, #84cc16 40%, #fbbf24 70%, #f97316 100%)",
        ),
    ]
}

pub fn collections() -> Vec<Collection> {
    vec![
        collection(
            "col-1",
            "Mind-Bending Sci-Fi",
            "Films that challenge perception, bend reality, and leave you questioning everything you thought you knew.",
            &["1", "9", "14", "5", "19"],
        ),
        collection(
            "col-2",
            "Feel-Good Comfort",
            "Warm, uplifting stories perfect for when you need a cinematic hug and a reminder that the world can be beautiful.",
            &["4", "7", "12", "16", "20"],
        ),
        collection(
            "col-3",
            "Edge-of-Seat Thrillers",
            "White-knuckle tension from the first frame to the last. Sleep with the lights on.",
            &["5", "15", "6", "13", "19"],
        ),
        collection(
            "col-4",
            "Cinematic Masterpieces",
            "The finest achievements in visual storytelling. Every frame a painting, every scene a revelation.",
            &["8", "18", "10", "1", "2"],
        ),
    ]
}

pub fn moods() -> Vec<MoodOption> {
    vec![
        mood(
            "mind-bending",
            "🎯",
            "Mind-Bending",
            &[Genre::SciFi, Genre::Thriller],
            "Reality-warping narratives that challenge perception",
        ),
        mood(
            "feel-good",
            "☀️",
            "Feel-Good",
            &[Genre::Comedy, Genre::Romance],
            "Warm stories that leave you smiling",
        ),
        mood(
            "adrenaline",
            "⚡",
            "Adrenaline Rush",
            &[Genre::Action, Genre::Thriller],
            "Heart-pounding action and tension",
        ),
        mood(
            "deep-moving",
            "🎭",
            "Deep & Moving",
            &[Genre::Drama],
            "Emotionally rich stories with lasting impact",
        ),
        mood(
            "spine-chilling",
            "👻",
            "Spine-Chilling",
            &[Genre::Horror, Genre::Thriller],
            "Atmospheric terror and supernatural dread",
        ),
        mood(
            "visually-stunning",
            "✨",
            "Visually Stunning",
            &[Genre::SciFi, Genre::Animation],
            "Breathtaking visual artistry and world-building",
        ),
    ]
}

pub fn user_data() -> UserData {
    UserData {
        watchlist: ["1", "3", "5", "8", "9", "14", "15", "18"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        ratings: vec![
            rating("2", 4.5, "2024-12-15"),
            rating("4", 4.0, "2024-12-20"),
            rating("7", 4.5, "2025-01-03"),
            rating("10", 5.0, "2025-01-10"),
            rating("12", 3.5, "2025-01-18"),
            rating("16", 4.5, "2025-01-25"),
        ],
        stats: UserStats {
            total_hours_watched: 142,
            films_watched_this_month: 8,
            average_rating: 4.2,
            favorite_genre: Genre::SciFi,
            total_films_watched: 47,
            monthly_activity: [
                ("Aug", 5),
                ("Sep", 7),
                ("Oct", 9),
                ("Nov", 6),
                ("Dec", 8),
                ("Jan", 8),
            ]
            .iter()
            .map(|(month, count)| MonthlyActivity {
                month: month.to_string(),
                count: *count,
            })
            .collect(),
        },
    }
}

pub fn catalog() -> Catalog {
    Catalog::new(films(), collections(), moods(), user_data())
}
