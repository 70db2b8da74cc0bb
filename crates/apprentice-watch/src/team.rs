use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleTier {
    Founder,
    SeniorLead,
    Ambassador,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub tier: RoleTier,
    pub links: SocialLinks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'static str>,
}

impl TeamMember {
    /// Profiles for schema.org `sameAs`, in LinkedIn, Twitter, GitHub order.
    pub fn same_as(&self) -> Vec<&'static str> {
        [self.links.linkedin, self.links.twitter, self.links.github]
            .into_iter()
            .flatten()
            .collect()
    }
}

pub fn roster() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: "Farrukh Ahmad",
            role: "Founder",
            image: "/media/farrukh-av.png",
            description: "I know firsthand how frustrating it can be to keep up with apprenticeship opportunities scattered across different websites. That's why I'm on a mission to make the process easier, clearer, and less stressful for young professionals. I'm not just talking about change. I'm building something that actually makes a difference.",
            tier: RoleTier::Founder,
            links: SocialLinks {
                github: Some("https://github.com/HeyFarrukh?utm_source=apprentice-watch"),
                linkedin: Some(
                    "https://www.linkedin.com/in/farrukh-ahmad-9547b1260?utm_source=apprentice-watch",
                ),
                twitter: None,
            },
            email: Some("farrukh@apprenticewatch.com"),
        },
        TeamMember {
            name: "Jamal Mitchell",
            role: "Co-Founder",
            image: "/media/jamal-av.png",
            description: "As friends with similar career goals, I often shared my frustration that many attempts to inform and empower aspiring apprentices were lacking. When Farrukh shared his bold vision with me, I immediately recognised the potential for change and knew this was the opportunity to make a real impact.",
            tier: RoleTier::Founder,
            links: SocialLinks {
                github: Some("https://github.com"),
                linkedin: Some(
                    "https://www.linkedin.com/in/jamal-mitchell-a7729428b?utm_source=apprentice-watch",
                ),
                twitter: None,
            },
            email: Some("jamal@apprenticewatch.com"),
        },
        TeamMember {
            name: "Humza",
            role: "Chief Technical Officer",
            image: "/media/humza-av.png",
            description: "As a friend of both founders, I really connected with their vision and saw firsthand how challenging the apprenticeship application process can be. I joined the team because I genuinely believe in what they're building, and I wanted to use my experience in development and operations to help turn that vision into reality.",
            tier: RoleTier::SeniorLead,
            links: SocialLinks {
                github: Some("https://github.com/hhussain04"),
                linkedin: Some("https://www.linkedin.com/in/humzahussain04/"),
                twitter: None,
            },
            email: Some("humza@apprenticewatch.com"),
        },
    ]
}

/// Members split by tier, each tier keeping roster order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TeamRoster {
    pub founders: Vec<TeamMember>,
    pub senior_leads: Vec<TeamMember>,
    pub ambassadors: Vec<TeamMember>,
}

impl TeamRoster {
    pub fn partition(members: &[TeamMember]) -> Self {
        let of_tier = |tier: RoleTier| -> Vec<TeamMember> {
            members
                .iter()
                .filter(|member| member.tier == tier)
                .cloned()
                .collect()
        };

        Self {
            founders: of_tier(RoleTier::Founder),
            senior_leads: of_tier(RoleTier::SeniorLead),
            ambassadors: of_tier(RoleTier::Ambassador),
        }
    }

    pub fn has_ambassadors(&self) -> bool {
        !self.ambassadors.is_empty()
    }
}

pub const ORGANIZATION_NAME: &str = "ApprenticeWatch";
pub const ORGANIZATION_DESCRIPTION: &str = "The minds behind ApprenticeWatch, working to revolutionise how apprenticeships are discovered and accessed.";

pub fn organization_json_ld(site_url: &str, members: &[TeamMember]) -> Value {
    let employees: Vec<Value> = members
        .iter()
        .map(|member| {
            json!({
                "@type": "Person",
                "name": member.name,
                "jobTitle": member.role,
                "image": member.image,
                "description": member.description,
                "sameAs": member.same_as(),
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": ORGANIZATION_NAME,
        "url": site_url,
        "description": ORGANIZATION_DESCRIPTION,
        "employee": employees,
    })
}
