//! Built-in synonyms for common technology terms.

use crate::analysis::dictionary::synonyms::{SynonymsConfig, SynonymsDictionary};

/// Code points ignored when matching technology terms, so that "react js",
/// "reactjs" and "react.js" are the same term.
pub const TAG_IGNORE: [char; 4] = [' ', '-', '.', '/'];

const TAGS: &[(&str, &str)] = &[
    (".net, dotnet", ".net"),
    (".net core, dotnet core", ".net-core"),
    ("ajax", "ajax"),
    ("amazon web services, aws", "amazon-web-services"),
    ("android", "android"),
    ("angular", "angular"),
    ("apache kafka, kafka", "apache-kafka"),
    ("asp.net", "asp.net"),
    ("asp.net core", "asp.net-core"),
    ("azure, microsoft azure", "azure"),
    ("bash", "bash"),
    ("c", "c"),
    ("c#, c sharp, csharp", "c#"),
    ("c++, cpp", "c++"),
    ("clojure", "clojure"),
    ("css, css3", "css"),
    ("dart", "dart"),
    ("django", "django"),
    ("docker", "docker"),
    ("elasticsearch", "elasticsearch"),
    ("elixir", "elixir"),
    ("entity framework", "entity-framework"),
    ("erlang", "erlang"),
    ("express, express.js", "express"),
    ("f#, f sharp, fsharp", "f#"),
    ("flask", "flask"),
    ("flutter", "flutter"),
    ("git", "git"),
    ("github", "github"),
    ("go, golang", "go"),
    ("google cloud platform, gcp", "google-cloud-platform"),
    ("graphql", "graphql"),
    ("haskell", "haskell"),
    ("html", "html"),
    ("html5", "html5"),
    ("http", "http"),
    ("ios", "ios"),
    ("java", "java"),
    ("javascript, js, ecmascript", "javascript"),
    ("jquery", "jquery"),
    ("json", "json"),
    ("kotlin", "kotlin"),
    ("kubernetes, k8s", "kubernetes"),
    ("linux", "linux"),
    ("lua", "lua"),
    ("machine learning, ml", "machine-learning"),
    ("macos, mac os x, os x", "macos"),
    ("mongodb, mongo", "mongodb"),
    ("mysql", "mysql"),
    ("next.js, nextjs", "next.js"),
    ("nginx", "nginx"),
    ("node.js, nodejs, io.js", "node.js"),
    ("npm", "npm"),
    ("numpy", "numpy"),
    ("oauth", "oauth"),
    ("objective-c, objc, obj-c", "objective-c"),
    ("pandas", "pandas"),
    ("perl", "perl"),
    ("php", "php"),
    ("postgresql, postgres", "postgresql"),
    ("powershell", "powershell"),
    ("python", "python"),
    ("pytorch", "pytorch"),
    ("react, reactjs", "reactjs"),
    ("react native", "react-native"),
    ("redis", "redis"),
    ("regex, regexp, regular expressions", "regex"),
    ("ruby", "ruby"),
    ("ruby on rails, rails, ror", "ruby-on-rails"),
    ("rust", "rust"),
    ("scala", "scala"),
    ("spring boot", "spring-boot"),
    ("sql", "sql"),
    ("sql server, mssql", "sql-server"),
    ("sqlite", "sqlite"),
    ("swift", "swift"),
    ("tensorflow", "tensorflow"),
    ("typescript", "typescript"),
    ("unix", "unix"),
    ("visual studio code, vscode, vs code", "visual-studio-code"),
    ("vue.js, vuejs, vue", "vue.js"),
    ("webpack", "webpack"),
    ("xcode", "xcode"),
    ("xml", "xml"),
    ("yaml, yml", "yaml"),
];

/// A dictionary of common technology terms mapped to canonical tag names.
///
/// Matching ignores case, spaces, hyphens, dots and forward slashes, so
/// "Ruby on Rails", "ruby-on-rails" and "RubyOnRails" are all `ruby-on-rails`.
///
/// # Examples
///
/// ```
/// use jargon::analysis::dictionary::{Dictionary, tech_tags};
///
/// let tags = tech_tags();
/// assert_eq!(tags.lookup(&["Node.JS"]).as_deref(), Some("node.js"));
/// assert_eq!(tags.lookup(&["c", "sharp"]).as_deref(), Some("c#"));
/// ```
pub fn tech_tags() -> SynonymsDictionary {
    let config = TAGS.iter().fold(
        SynonymsConfig::new()
            .with_ignore_case(true)
            .with_ignore(TAG_IGNORE),
        |config, &(synonyms, canonical)| config.with_mapping(synonyms, canonical),
    );
    SynonymsDictionary::new(config)
}
