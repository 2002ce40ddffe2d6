//! Static list of commonly exposed administrative and API paths.
//!
//! These are probed on every discovery run, after whatever the sitemaps and
//! crawler surfaced. The list targets the usual suspects: admin panels,
//! leaked dotfiles, CMS entry points, and API documentation endpoints.

/// Common paths appended to the candidate set.
pub const COMMON_PATHS: &[&str] = &[
    "/admin",
    "/admin/login",
    "/administrator",
    "/login",
    "/dashboard",
    "/console",
    "/cpanel",
    "/phpmyadmin",
    "/wp-admin",
    "/wp-login.php",
    "/wp-json",
    "/.env",
    "/.git/config",
    "/.htaccess",
    "/.well-known/security.txt",
    "/config.php",
    "/phpinfo.php",
    "/server-status",
    "/backup",
    "/api",
    "/api/v1",
    "/api-docs",
    "/graphql",
    "/swagger-ui.html",
    "/robots.txt",
    "/sitemap.xml",
];
