//! Hard-coded promotional data behind the read-only GET endpoints. The
//! anniversary pages render these directly; nothing here is persisted.

use serde::Serialize;

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TrainingProgram {
    pub id: i64,
    pub name: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub location: &'static str,
    pub start_date: &'static str,
    pub end_date: &'static str,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BeyondProgram {
    pub id: i64,
    pub name: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub category: &'static str,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Champion {
    pub id: i64,
    pub name: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub bio: &'static str,
    pub image_url: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    pub id: i64,
    pub name: &'static str,
    pub logo_url: &'static str,
    pub website: &'static str,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedStory {
    pub id: i64,
    pub name: &'static str,
    pub title: &'static str,
    pub story: &'static str,
    pub date: &'static str,
}

pub fn training_programs() -> Vec<TrainingProgram> {
    vec![
        TrainingProgram {
            id: 1,
            name: "Free Training Program",
            description: "Weekly free training sessions for youth from all backgrounds",
            image_url: "https://images.unsplash.com/photo-1526232761682-d26e03ac148e",
            location: "City Sports Center",
            start_date: "2023-06-01",
            end_date: "2023-12-31",
        },
        TrainingProgram {
            id: 2,
            name: "Equipment for All",
            description: "Providing sports equipment to those who can't afford it",
            image_url: "https://images.unsplash.com/photo-1599058917212-d750089bc07e",
            location: "Multiple Locations",
            start_date: "2023-01-01",
            end_date: "2023-12-31",
        },
        TrainingProgram {
            id: 3,
            name: "Inclusive Sports Camps",
            description: "Sports camps designed to be inclusive for all abilities",
            image_url: "https://images.unsplash.com/photo-1526401485004-46910ecc8e51",
            location: "Regional Sports Complex",
            start_date: "2023-07-10",
            end_date: "2023-08-20",
        },
        TrainingProgram {
            id: 4,
            name: "Adaptive Sports Initiative",
            description: "Sports programs tailored for people with disabilities",
            image_url: "https://images.unsplash.com/photo-1517927033932-b3d18e61fb21",
            location: "Community Center",
            start_date: "2023-03-15",
            end_date: "2023-11-30",
        },
    ]
}

pub fn beyond_programs() -> Vec<BeyondProgram> {
    vec![
        BeyondProgram {
            id: 1,
            name: "Building Team Leaders",
            description: "Leadership development through team sports",
            image_url: "https://images.unsplash.com/photo-1461896836934-ffe607ba8211",
            category: "Leadership",
        },
        BeyondProgram {
            id: 2,
            name: "Sports Mentorship",
            description: "Connecting youth with experienced mentors",
            image_url: "https://images.unsplash.com/photo-1556817411-31ae72fa3ea0",
            category: "Mentorship",
        },
        BeyondProgram {
            id: 3,
            name: "Scholar Athletes",
            description: "Supporting academic success for student athletes",
            image_url: "https://images.unsplash.com/photo-1427504494785-3a9ca7044f45",
            category: "Education",
        },
        BeyondProgram {
            id: 4,
            name: "Career Skills Through Sport",
            description: "Developing workplace skills through sports activities",
            image_url: "https://images.unsplash.com/photo-1552581234-26160f608093",
            category: "Career Development",
        },
    ]
}

pub fn champions() -> Vec<Champion> {
    vec![
        Champion {
            id: 1,
            name: "Coach Michael",
            title: "Youth Coach & Mentor",
            organization: "Grassroots Heroes",
            bio: "Former professional athlete dedicating his career to coaching underserved youth",
            image_url: "https://images.unsplash.com/photo-1556656793-08538906a9f8",
            achievements: &[
                "Coached 200+ youth",
                "Developed 5 scholarship athletes",
                "Community Service Award 2022",
            ],
        },
        Champion {
            id: 2,
            name: "Community First Foundation",
            title: "Non-profit Organization",
            organization: "Community First",
            bio: "Organization focused on bringing sports facilities to low-income neighborhoods",
            image_url: "https://images.unsplash.com/photo-1540206351-d6465b3ac5c1",
            achievements: &[
                "Built 12 playgrounds",
                "Renovated 8 community sports facilities",
                "Raised $2M for sports programs",
            ],
        },
        Champion {
            id: 3,
            name: "East Side Sports Alliance",
            title: "Community Group",
            organization: "East Side Alliance",
            bio: "Neighborhood-led initiative providing safe sports activities for at-risk youth",
            image_url: "https://images.unsplash.com/photo-1491308056676-205b7c9a7dc1",
            achievements: &[
                "Reduced neighborhood crime by 30%",
                "250+ regular participants",
                "Public Safety Partnership Award",
            ],
        },
    ]
}

pub fn sponsors() -> Vec<Sponsor> {
    vec![
        Sponsor {
            id: 1,
            name: "SportGear",
            logo_url: "https://via.placeholder.com/120x60?text=SportGear",
            website: "https://example.com/sponsor1",
        },
        Sponsor {
            id: 2,
            name: "ActiveLife",
            logo_url: "https://via.placeholder.com/120x60?text=ActiveLife",
            website: "https://example.com/sponsor2",
        },
        Sponsor {
            id: 3,
            name: "FitFuture",
            logo_url: "https://via.placeholder.com/120x60?text=FitFuture",
            website: "https://example.com/sponsor3",
        },
        Sponsor {
            id: 4,
            name: "TeamSpirit",
            logo_url: "https://via.placeholder.com/120x60?text=TeamSpirit",
            website: "https://example.com/sponsor4",
        },
        Sponsor {
            id: 5,
            name: "ChampionsClub",
            logo_url: "https://via.placeholder.com/120x60?text=ChampionsClub",
            website: "https://example.com/sponsor5",
        },
        Sponsor {
            id: 6,
            name: "VictoryLane",
            logo_url: "https://via.placeholder.com/120x60?text=VictoryLane",
            website: "https://example.com/sponsor6",
        },
    ]
}

pub fn featured_story() -> FeaturedStory {
    FeaturedStory {
        id: 1,
        name: "Jamie Davis",
        title: "Program Participant, 2018-2020",
        story: "Sports taught me discipline and perseverance. The community basketball program \
                gave me purpose and helped me develop leadership skills that I use every day in \
                my career.",
        date: "2023-03-15",
    }
}
