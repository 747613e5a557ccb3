use std::str::FromStr;

use serde::Deserializer;
use strum::{Display, EnumString, IntoStaticStr};

/// Language tag of a Gobin [`DocumentFile`](crate::DocumentFile).
///
/// The string ids are the names the Gobin server uses for syntax
/// highlighting. [`Language::Auto`] asks the server to detect the language
/// from the file name or content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[non_exhaustive]
pub enum Language {
    #[strum(serialize = "auto")]
    Auto,
    #[strum(serialize = "ABAP")]
    Abap,
    #[strum(serialize = "ABNF")]
    Abnf,
    #[strum(serialize = "ActionScript")]
    ActionScript,
    #[strum(serialize = "ActionScript 3")]
    ActionScript3,
    #[strum(serialize = "Ada")]
    Ada,
    #[strum(serialize = "Angular2")]
    Angular2,
    #[strum(serialize = "ANTLR")]
    Antlr,
    #[strum(serialize = "ApacheConf")]
    ApacheConf,
    #[strum(serialize = "APL")]
    Apl,
    #[strum(serialize = "AppleScript")]
    AppleScript,
    #[strum(serialize = "Arduino")]
    Arduino,
    #[strum(serialize = "Awk")]
    Awk,
    #[strum(serialize = "Ballerina")]
    Ballerina,
    #[strum(serialize = "Bash")]
    Bash,
    #[strum(serialize = "Batchfile")]
    Batchfile,
    #[strum(serialize = "BibTeX")]
    Bibtex,
    #[strum(serialize = "Bicep")]
    Bicep,
    #[strum(serialize = "BlitzBasic")]
    BlitzBasic,
    #[strum(serialize = "BNF")]
    Bnf,
    #[strum(serialize = "Brainfuck")]
    Brainfuck,
    #[strum(serialize = "BQN")]
    Bqn,
    #[strum(serialize = "C")]
    C,
    #[strum(serialize = "C#")]
    CSharp,
    #[strum(serialize = "C++")]
    CPlusPlus,
    #[strum(serialize = "Caddyfile")]
    Caddyfile,
    #[strum(serialize = "Caddyfile Directives")]
    CaddyfileDirectives,
    #[strum(serialize = "Cap'n Proto")]
    CapNProto,
    #[strum(serialize = "Cassandra CQL")]
    CassandraCql,
    #[strum(serialize = "Ceylon")]
    Ceylon,
    #[strum(serialize = "CFEngine3")]
    Cfengine3,
    #[strum(serialize = "cfstatement")]
    Cfstatement,
    #[strum(serialize = "ChaiScript")]
    ChaiScript,
    #[strum(serialize = "Chapel")]
    Chapel,
    #[strum(serialize = "Cheetah")]
    Cheetah,
    #[strum(serialize = "Clojure")]
    Clojure,
    #[strum(serialize = "CMake")]
    Cmake,
    #[strum(serialize = "COBOL")]
    Cobol,
    #[strum(serialize = "CoffeeScript")]
    CoffeeScript,
    #[strum(serialize = "Common Lisp")]
    CommonLisp,
    #[strum(serialize = "Coq")]
    Coq,
    #[strum(serialize = "Crystal")]
    Crystal,
    #[strum(serialize = "CSS")]
    Css,
    #[strum(serialize = "Cython")]
    Cython,
    #[strum(serialize = "D")]
    D,
    #[strum(serialize = "Dart")]
    Dart,
    #[strum(serialize = "Diff")]
    Diff,
    #[strum(serialize = "Django/Jinja")]
    DjangoJinja,
    #[strum(serialize = "Docker")]
    Docker,
    #[strum(serialize = "DTD")]
    Dtd,
    #[strum(serialize = "Dylan")]
    Dylan,
    #[strum(serialize = "EBNF")]
    Ebnf,
    #[strum(serialize = "Elixir")]
    Elixir,
    #[strum(serialize = "Elm")]
    Elm,
    #[strum(serialize = "EmacsLisp")]
    EmacsLisp,
    #[strum(serialize = "Erlang")]
    Erlang,
    #[strum(serialize = "Factor")]
    Factor,
    #[strum(serialize = "Fish")]
    Fish,
    #[strum(serialize = "Forth")]
    Forth,
    #[strum(serialize = "Fortran")]
    Fortran,
    #[strum(serialize = "FSharp")]
    FSharp,
    #[strum(serialize = "GAS")]
    Gas,
    #[strum(serialize = "GDScript")]
    GdScript,
    #[strum(serialize = "Genshi")]
    Genshi,
    #[strum(serialize = "Genshi HTML")]
    GenshiHtml,
    #[strum(serialize = "Genshi Text")]
    GenshiText,
    #[strum(serialize = "Gherkin")]
    Gherkin,
    #[strum(serialize = "GLSL")]
    Glsl,
    #[strum(serialize = "Gnuplot")]
    Gnuplot,
    #[strum(serialize = "Go")]
    Go,
    #[strum(serialize = "Go HTML Template")]
    GoHtmlTemplate,
    #[strum(serialize = "Go Text Template")]
    GoTextTemplate,
    #[strum(serialize = "GraphQL")]
    GraphQl,
    #[strum(serialize = "Groff")]
    Groff,
    #[strum(serialize = "Groovy")]
    Groovy,
    #[strum(serialize = "Handlebars")]
    Handlebars,
    #[strum(serialize = "Haskell")]
    Haskell,
    #[strum(serialize = "Haxe")]
    Haxe,
    #[strum(serialize = "HCL")]
    Hcl,
    #[strum(serialize = "Hexdump")]
    Hexdump,
    #[strum(serialize = "HLB")]
    Hlb,
    #[strum(serialize = "HLSL")]
    Hlsl,
    #[strum(serialize = "HTML")]
    Html,
    #[strum(serialize = "HTTP")]
    Http,
    #[strum(serialize = "Hy")]
    Hy,
    #[strum(serialize = "Idris")]
    Idris,
    #[strum(serialize = "Igor")]
    Igor,
    #[strum(serialize = "INI")]
    Ini,
    #[strum(serialize = "Io")]
    Io,
    #[strum(serialize = "J")]
    J,
    #[strum(serialize = "Java")]
    Java,
    #[strum(serialize = "JavaScript")]
    JavaScript,
    #[strum(serialize = "JSON")]
    Json,
    #[strum(serialize = "Julia")]
    Julia,
    #[strum(serialize = "Jungle")]
    Jungle,
    #[strum(serialize = "Kotlin")]
    Kotlin,
    #[strum(serialize = "Lighttpd configuration file")]
    LighttpdConfigurationFile,
    #[strum(serialize = "LLVM")]
    Llvm,
    #[strum(serialize = "Lua")]
    Lua,
    #[strum(serialize = "Makefile")]
    Makefile,
    #[strum(serialize = "Mako")]
    Mako,
    #[strum(serialize = "markdown")]
    Markdown,
    #[strum(serialize = "Mason")]
    Mason,
    #[strum(serialize = "Mathematica")]
    Mathematica,
    #[strum(serialize = "Matlab")]
    Matlab,
    #[strum(serialize = "MiniZinc")]
    MiniZinc,
    #[strum(serialize = "MLIR")]
    Mlir,
    #[strum(serialize = "Modula-2")]
    Modula2,
    #[strum(serialize = "MonkeyC")]
    MonkeyC,
    #[strum(serialize = "MorrowindScript")]
    MorrowindScript,
    #[strum(serialize = "Myghty")]
    Myghty,
    #[strum(serialize = "MySQL")]
    Mysql,
    #[strum(serialize = "NASM")]
    Nasm,
    #[strum(serialize = "Newspeak")]
    Newspeak,
    #[strum(serialize = "Nginx configuration file")]
    NginxConfigurationFile,
    #[strum(serialize = "Nim")]
    Nim,
    #[strum(serialize = "Nix")]
    Nix,
    #[strum(serialize = "Objective-C")]
    ObjectiveC,
    #[strum(serialize = "OCaml")]
    Ocaml,
    #[strum(serialize = "Octave")]
    Octave,
    #[strum(serialize = "OnesEnterprise")]
    OnesEnterprise,
    #[strum(serialize = "OpenEdge ABL")]
    OpenEdgeAbl,
    #[strum(serialize = "OpenSCAD")]
    OpenScad,
    #[strum(serialize = "Org Mode")]
    OrgMode,
    #[strum(serialize = "PacmanConf")]
    PacmanConf,
    #[strum(serialize = "Perl")]
    Perl,
    #[strum(serialize = "PHP")]
    Php,
    #[strum(serialize = "PHTML")]
    Phtml,
    #[strum(serialize = "Pig")]
    Pig,
    #[strum(serialize = "PkgConfig")]
    Pkgconfig,
    #[strum(serialize = "PL/pgSQL")]
    PlPgsql,
    #[strum(serialize = "plaintext")]
    Plaintext,
    #[strum(serialize = "Pony")]
    Pony,
    #[strum(serialize = "PostgreSQL SQL dialect")]
    PostgreSqlSqlDialect,
    #[strum(serialize = "PostScript")]
    PostScript,
    #[strum(serialize = "POVRay")]
    PovRay,
    #[strum(serialize = "PowerShell")]
    PowerShell,
    #[strum(serialize = "Prolog")]
    Prolog,
    #[strum(serialize = "PromQL")]
    PromQl,
    #[strum(serialize = "Properties")]
    Properties,
    #[strum(serialize = "Protocol Buffer")]
    ProtocolBuffer,
    #[strum(serialize = "PSL")]
    Psl,
    #[strum(serialize = "Puppet")]
    Puppet,
    #[strum(serialize = "Python 2")]
    Python2,
    #[strum(serialize = "Python")]
    Python,
    #[strum(serialize = "QBasic")]
    Qbasic,
    #[strum(serialize = "R")]
    R,
    #[strum(serialize = "Racket")]
    Racket,
    #[strum(serialize = "Ragel")]
    Ragel,
    #[strum(serialize = "Raku")]
    Raku,
    #[strum(serialize = "react")]
    React,
    #[strum(serialize = "ReasonML")]
    ReasonMl,
    #[strum(serialize = "reg")]
    Reg,
    #[strum(serialize = "reStructuredText")]
    ReStructuredText,
    #[strum(serialize = "Rexx")]
    Rexx,
    #[strum(serialize = "Ruby")]
    Ruby,
    #[strum(serialize = "Rust")]
    Rust,
    #[strum(serialize = "SAS")]
    Sas,
    #[strum(serialize = "Sass")]
    Sass,
    #[strum(serialize = "Scala")]
    Scala,
    #[strum(serialize = "Scheme")]
    Scheme,
    #[strum(serialize = "Scilab")]
    Scilab,
    #[strum(serialize = "SCSS")]
    Scss,
    #[strum(serialize = "Sed")]
    Sed,
    #[strum(serialize = "Smalltalk")]
    Smalltalk,
    #[strum(serialize = "Smarty")]
    Smarty,
    #[strum(serialize = "Snobol")]
    Snobol,
    #[strum(serialize = "Solidity")]
    Solidity,
    #[strum(serialize = "SPARQL")]
    Sparql,
    #[strum(serialize = "SQL")]
    Sql,
    #[strum(serialize = "SquidConf")]
    SquidConf,
    #[strum(serialize = "Standard ML")]
    StandardMl,
    #[strum(serialize = "stas")]
    Stas,
    #[strum(serialize = "Stylus")]
    Stylus,
    #[strum(serialize = "Svelte")]
    Svelte,
    #[strum(serialize = "Swift")]
    Swift,
    #[strum(serialize = "SYSTEMD")]
    Systemd,
    #[strum(serialize = "systemverilog")]
    SystemVerilog,
    #[strum(serialize = "TableGen")]
    TableGen,
    #[strum(serialize = "TASM")]
    Tasm,
    #[strum(serialize = "Tcl")]
    Tcl,
    #[strum(serialize = "Tcsh")]
    Tcsh,
    #[strum(serialize = "Termcap")]
    Termcap,
    #[strum(serialize = "Terminfo")]
    Terminfo,
    #[strum(serialize = "Terraform")]
    Terraform,
    #[strum(serialize = "TeX")]
    Tex,
    #[strum(serialize = "Thrift")]
    Thrift,
    #[strum(serialize = "TOML")]
    Toml,
    #[strum(serialize = "TradingView")]
    TradingView,
    #[strum(serialize = "Transact-SQL")]
    TransactSql,
    #[strum(serialize = "Turing")]
    Turing,
    #[strum(serialize = "Turtle")]
    Turtle,
    #[strum(serialize = "Twig")]
    Twig,
    #[strum(serialize = "TypeScript")]
    TypeScript,
    #[strum(serialize = "TypoScript")]
    TypoScript,
    #[strum(serialize = "TypoScriptCssData")]
    TypoScriptCssData,
    #[strum(serialize = "TypoScriptHtmlData")]
    TypoScriptHtmlData,
    #[strum(serialize = "VB.net")]
    VbNet,
    #[strum(serialize = "verilog")]
    Verilog,
    #[strum(serialize = "VHDL")]
    Vhdl,
    #[strum(serialize = "VHS")]
    Vhs,
    #[strum(serialize = "VimL")]
    VimL,
    #[strum(serialize = "vue")]
    Vue,
    #[strum(serialize = "WDTE")]
    Wdte,
    #[strum(serialize = "XML")]
    Xml,
    #[strum(serialize = "Xorg")]
    Xorg,
    #[strum(serialize = "YAML")]
    Yaml,
    #[strum(serialize = "YANG")]
    Yang,
    #[strum(serialize = "Zig")]
    Zig,
}

impl Language {
    /// The id string used by the Gobin server for this language.
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.into()
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::Auto
    }
}

/// Deserializes a language id leniently: names the server reports that
/// this crate does not know map to [`Language::Auto`] instead of failing
/// the whole document decode.
pub(crate) fn lenient<'de, D>(deserializer: D) -> Result<Language, D::Error>
where
    D: Deserializer<'de>,
{
    let name: String = serde::Deserialize::deserialize(deserializer)?;
    Ok(Language::from_str(&name).unwrap_or(Language::Auto))
}
