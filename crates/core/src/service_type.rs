//! One-click service templates the platform can deploy.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Error returned when a string names no known service template
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown service type: {0}")]
pub struct UnknownServiceType(pub String);

macro_rules! service_types {
    ($($variant:ident => $id:literal,)+) => {
        /// Closed set of service template identifiers.
        ///
        /// Anything outside this set is rejected when parsed or deserialized.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ServiceType {
            $($variant,)+
        }

        impl ServiceType {
            /// Every known template, in identifier order
            pub const ALL: &'static [ServiceType] = &[$(ServiceType::$variant,)+];

            /// Identifier used by the platform API
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(ServiceType::$variant => $id,)+
                }
            }
        }

        impl FromStr for ServiceType {
            type Err = UnknownServiceType;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($id => Ok(ServiceType::$variant),)+
                    other => Err(UnknownServiceType(other.to_string())),
                }
            }
        }
    };
}

service_types! {
    Activepieces => "activepieces",
    Appsmith => "appsmith",
    Appwrite => "appwrite",
    Authentik => "authentik",
    Babybuddy => "babybuddy",
    Budge => "budge",
    Changedetection => "changedetection",
    Chatwoot => "chatwoot",
    ClassicpressWithMariadb => "classicpress-with-mariadb",
    ClassicpressWithMysql => "classicpress-with-mysql",
    ClassicpressWithoutDatabase => "classicpress-without-database",
    Cloudflared => "cloudflared",
    CodeServer => "code-server",
    Dashboard => "dashboard",
    Directus => "directus",
    DirectusWithPostgresql => "directus-with-postgresql",
    DockerRegistry => "docker-registry",
    Docuseal => "docuseal",
    DocusealWithPostgres => "docuseal-with-postgres",
    Dokuwiki => "dokuwiki",
    Duplicati => "duplicati",
    Emby => "emby",
    Embystat => "embystat",
    Fider => "fider",
    Filebrowser => "filebrowser",
    Firefly => "firefly",
    Formbricks => "formbricks",
    Ghost => "ghost",
    Gitea => "gitea",
    GiteaWithMariadb => "gitea-with-mariadb",
    GiteaWithMysql => "gitea-with-mysql",
    GiteaWithPostgresql => "gitea-with-postgresql",
    Glance => "glance",
    Glances => "glances",
    Glitchtip => "glitchtip",
    Grafana => "grafana",
    GrafanaWithPostgresql => "grafana-with-postgresql",
    Grocy => "grocy",
    Heimdall => "heimdall",
    Homepage => "homepage",
    Jellyfin => "jellyfin",
    Kuzzle => "kuzzle",
    Listmonk => "listmonk",
    Logto => "logto",
    Mediawiki => "mediawiki",
    Meilisearch => "meilisearch",
    Metabase => "metabase",
    Metube => "metube",
    Minio => "minio",
    Moodle => "moodle",
    N8n => "n8n",
    N8nWithPostgresql => "n8n-with-postgresql",
    NextImageTransformation => "next-image-transformation",
    Nextcloud => "nextcloud",
    Nocodb => "nocodb",
    Odoo => "odoo",
    Openblocks => "openblocks",
    Pairdrop => "pairdrop",
    Penpot => "penpot",
    Phpmyadmin => "phpmyadmin",
    Pocketbase => "pocketbase",
    Posthog => "posthog",
    ReactiveResume => "reactive-resume",
    Rocketchat => "rocketchat",
    Shlink => "shlink",
    Slash => "slash",
    Snapdrop => "snapdrop",
    Statusnook => "statusnook",
    StirlingPdf => "stirling-pdf",
    Supabase => "supabase",
    Syncthing => "syncthing",
    Tolgee => "tolgee",
    Trigger => "trigger",
    TriggerWithExternalDatabase => "trigger-with-external-database",
    Twenty => "twenty",
    Umami => "umami",
    UnleashWithPostgresql => "unleash-with-postgresql",
    UnleashWithoutDatabase => "unleash-without-database",
    UptimeKuma => "uptime-kuma",
    Vaultwarden => "vaultwarden",
    Vikunja => "vikunja",
    Weblate => "weblate",
    Whoogle => "whoogle",
    WordpressWithMariadb => "wordpress-with-mariadb",
    WordpressWithMysql => "wordpress-with-mysql",
    WordpressWithoutDatabase => "wordpress-without-database",
}

impl ServiceType {
    /// All identifiers, for publishing in a JSON Schema `enum`
    pub fn identifiers() -> Vec<&'static str> {
        Self::ALL.iter().map(ServiceType::as_str).collect()
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ServiceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ServiceType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_template_count() {
        assert_eq!(ServiceType::ALL.len(), 86);
    }

    #[test]
    fn test_identifiers_are_unique() {
        let ids: HashSet<_> = ServiceType::identifiers().into_iter().collect();
        assert_eq!(ids.len(), ServiceType::ALL.len());
    }

    #[test]
    fn test_every_identifier_parses_back() {
        for service_type in ServiceType::ALL {
            let parsed: ServiceType = service_type.as_str().parse().unwrap();
            assert_eq!(&parsed, service_type);
        }
    }

    #[test]
    fn test_unknown_identifier_rejected() {
        let err = "wordpress".parse::<ServiceType>().unwrap_err();
        assert_eq!(err, UnknownServiceType("wordpress".to_string()));
        assert_eq!(err.to_string(), "unknown service type: wordpress");
    }

    #[test]
    fn test_serde_uses_identifier() {
        let json = serde_json::to_string(&ServiceType::N8nWithPostgresql).unwrap();
        assert_eq!(json, "\"n8n-with-postgresql\"");

        let parsed: ServiceType = serde_json::from_str("\"stirling-pdf\"").unwrap();
        assert_eq!(parsed, ServiceType::StirlingPdf);

        assert!(serde_json::from_str::<ServiceType>("\"StirlingPdf\"").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ServiceType::CodeServer.to_string(), "code-server");
    }
}
