//! Proxy routes and the site URL handed to drush

use crate::options::{ProxyPorts, RecipeOptions};

pub const DRUSH_URI_VAR: &str = "DRUSH_OPTIONS_URI";

/// The service the proxy routes to for a web server.
pub fn proxy_service(via: &str) -> Option<&'static str> {
    if via.starts_with("nginx") {
        Some("appserver_nginx")
    } else if via.starts_with("apache") {
        Some("appserver")
    } else {
        None
    }
}

/// Route `<app>.<domain>` to the proxy service.
///
/// An explicit `proxy_service` in the options is kept.
pub fn register(options: &mut RecipeOptions, domain: &str) {
    if options.proxy_service.is_none() {
        options.proxy_service = proxy_service(&options.via).map(str::to_string);
    }
    if let Some(service) = options.proxy_service.clone() {
        let host = format!("{}.{domain}", options.app);
        tracing::debug!(service = %service, host = %host, "Registering proxy route");
        options.proxy.insert(service, vec![host]);
    }
}

/// The URL drush should use for the site.
///
/// An explicit `drush_uri` wins. Otherwise the first proxy hostname of the
/// proxy service is used with the protocol of that service (falling back to
/// the appserver) and the last proxy port when it is not the standard one.
pub fn drush_uri(options: &RecipeOptions, ports: Option<ProxyPorts>) -> Option<String> {
    if let Some(uri) = options.drush_uri.as_deref().filter(|u| !u.is_empty()) {
        return Some(uri.to_string());
    }

    let service = options.proxy_service.as_deref()?;
    let host = options.proxy.get(service)?.first()?;

    let ssl = options
        .services
        .get(service)
        .and_then(|svc| svc.ssl)
        .or_else(|| options.services.get("appserver").and_then(|svc| svc.ssl))
        .unwrap_or(false);
    let (protocol, standard) = if ssl { ("https", 443) } else { ("http", 80) };

    let port = ports
        .and_then(|p| if ssl { p.https } else { p.http })
        .filter(|&p| p != standard)
        .map(|p| format!(":{p}"))
        .unwrap_or_default();

    Some(format!("{protocol}://{host}{port}"))
}

/// Export the drush URL on the appserver when one is known.
pub fn apply_drush_uri(options: &mut RecipeOptions, ports: Option<ProxyPorts>) {
    if let Some(uri) = drush_uri(options, ports) {
        options
            .appserver_mut()
            .overrides_mut()
            .environment
            .insert(DRUSH_URI_VAR.to_string(), uri);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acquia_meta::ServiceDefinition;
    use rstest::rstest;

    fn options(via: &str) -> RecipeOptions {
        let mut options = RecipeOptions {
            app: "mysite".into(),
            via: via.into(),
            ..Default::default()
        };
        options.appserver_mut().ssl = Some(true);
        options
    }

    #[rstest]
    #[case("nginx", Some("appserver_nginx"))]
    #[case("nginx:1.25", Some("appserver_nginx"))]
    #[case("apache", Some("appserver"))]
    #[case("apache:2.4", Some("appserver"))]
    #[case("caddy", None)]
    fn test_proxy_service(#[case] via: &str, #[case] expected: Option<&str>) {
        assert_eq!(proxy_service(via), expected);
    }

    #[test]
    fn test_register() {
        let mut options = options("apache");
        register(&mut options, "lndo.site");
        assert_eq!(options.proxy["appserver"], vec!["mysite.lndo.site"]);
    }

    #[test]
    fn test_register_unknown_server_adds_nothing() {
        let mut options = options("caddy");
        register(&mut options, "lndo.site");
        assert!(options.proxy.is_empty());
    }

    #[test]
    fn test_explicit_uri_wins() {
        let mut options = options("apache");
        options.drush_uri = Some("https://custom.test".into());
        register(&mut options, "lndo.site");
        assert_eq!(drush_uri(&options, None).as_deref(), Some("https://custom.test"));
    }

    #[rstest]
    #[case(None, "https://mysite.lndo.site")]
    #[case(Some(ProxyPorts { http: Some(80), https: Some(443) }), "https://mysite.lndo.site")]
    #[case(Some(ProxyPorts { http: Some(8080), https: Some(444) }), "https://mysite.lndo.site:444")]
    #[case(Some(ProxyPorts { http: Some(8080), https: None }), "https://mysite.lndo.site")]
    fn test_uri_ports(#[case] ports: Option<ProxyPorts>, #[case] expected: &str) {
        let mut options = options("apache");
        register(&mut options, "lndo.site");
        assert_eq!(drush_uri(&options, ports).as_deref(), Some(expected));
    }

    #[test]
    fn test_proxy_service_ssl_overrides_appserver() {
        let mut options = options("nginx");
        options.services.insert(
            "appserver_nginx".into(),
            ServiceDefinition {
                ssl: Some(false),
                ..Default::default()
            },
        );
        register(&mut options, "lndo.site");

        let ports = ProxyPorts {
            http: Some(8000),
            https: Some(444),
        };
        assert_eq!(
            drush_uri(&options, Some(ports)).as_deref(),
            Some("http://mysite.lndo.site:8000")
        );
    }

    #[test]
    fn test_no_route_no_uri() {
        let mut options = options("caddy");
        register(&mut options, "lndo.site");
        apply_drush_uri(&mut options, None);

        let env = options.services["appserver"].environment();
        assert!(env.is_none_or(|e| !e.contains_key(DRUSH_URI_VAR)));
    }
}
