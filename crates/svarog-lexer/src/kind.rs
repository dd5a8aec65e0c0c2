/// Token and node kinds for the SystemVerilog syntax tree.
///
/// One flat enum shared by the lexer and the parser, rowan-style: token
/// kinds first, composite node kinds after. `repr(u16)` with contiguous
/// variants so the parser can transmute from `rowan::SyntaxKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // Special
    Eof,
    Error,

    // Trivia
    Whitespace,
    LineComment,
    BlockComment,

    // Identifiers and literals
    Ident,
    EscapedIdent,
    SystemIdent,
    Directive,
    IntLiteral,
    RealLiteral,
    BasedLiteral,
    UnbasedUnsizedLiteral,
    StringLiteral,

    // Punctuation and operators
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Dot,
    DotStar,
    Colon,
    ColonColon,
    Question,
    Hash,
    HashHash,
    At,
    Dollar,
    Tick,
    TickBrace,
    Assign,
    EqEq,
    EqEqEq,
    Bang,
    BangEq,
    BangEqEq,
    Lt,
    LtEq,
    LtLt,
    LtLtLt,
    Gt,
    GtEq,
    GtGt,
    GtGtGt,
    Amp,
    AmpAmp,
    Pipe,
    PipePipe,
    Caret,
    CaretTilde,
    Tilde,
    TildeAmp,
    TildePipe,
    TildeCaret,
    Plus,
    PlusPlus,
    Minus,
    MinusMinus,
    MinusGt,
    Star,
    StarStar,
    Slash,
    Percent,

    // Keywords
    ModuleKw,
    MacromoduleKw,
    EndmoduleKw,
    InputKw,
    OutputKw,
    InoutKw,
    RefKw,
    WireKw,
    TriKw,
    Tri0Kw,
    Tri1Kw,
    TriandKw,
    TriorKw,
    TriregKw,
    WandKw,
    WorKw,
    UwireKw,
    Supply0Kw,
    Supply1Kw,
    RegKw,
    LogicKw,
    BitKw,
    ByteKw,
    IntKw,
    IntegerKw,
    ShortintKw,
    LongintKw,
    RealKw,
    RealtimeKw,
    TimeKw,
    StringKw,
    EventKw,
    VoidKw,
    SignedKw,
    UnsignedKw,
    VarKw,
    ParameterKw,
    LocalparamKw,
    DefparamKw,
    AssignKw,
    AlwaysKw,
    AlwaysCombKw,
    AlwaysFfKw,
    AlwaysLatchKw,
    InitialKw,
    FinalKw,
    BeginKw,
    EndKw,
    ForkKw,
    JoinKw,
    JoinAnyKw,
    JoinNoneKw,
    IfKw,
    ElseKw,
    ForKw,
    WhileKw,
    RepeatKw,
    ForeverKw,
    DoKw,
    CaseKw,
    CasexKw,
    CasezKw,
    EndcaseKw,
    DefaultKw,
    PosedgeKw,
    NegedgeKw,
    OrKw,
    AndKw,
    NotKw,
    FunctionKw,
    EndfunctionKw,
    TaskKw,
    EndtaskKw,
    GenerateKw,
    EndgenerateKw,
    GenvarKw,
    SpecifyKw,
    EndspecifyKw,
    AutomaticKw,
    StaticKw,
    TypedefKw,
    EnumKw,
    StructKw,
    UnionKw,
    PackedKw,
    TaggedKw,
    InterfaceKw,
    EndinterfaceKw,
    PackageKw,
    EndpackageKw,
    ProgramKw,
    EndprogramKw,
    PrimitiveKw,
    EndprimitiveKw,
    ConfigKw,
    EndconfigKw,
    ImportKw,
    ExportKw,
    ModportKw,
    WaitKw,
    DisableKw,
    ReleaseKw,
    ForceKw,
    DeassignKw,

    // Composite nodes (produced by the parser, never the lexer)
    SourceFile,
    ModuleDecl,
    ModuleBody,
    PortList,
    Port,
    ParamPortList,
    ParamDecl,
    Declarator,
    PortDecl,
    NetDecl,
    VarDecl,
    ContinuousAssign,
    AlwaysBlock,
    InitialBlock,
    GenerateRegion,
    FunctionDecl,
    TaskDecl,
    ModuleInstantiation,
    InstancePortList,
    InstancePort,
    PackedDimension,
    UnpackedDimension,
    TypeSpec,
    BinExpr,
    PrefixExpr,
    ParenExpr,
    CondExpr,
    ConcatExpr,
    ReplicExpr,
    IndexExpr,
    RangeExpr,
    FieldExpr,
    CallExpr,
    ArgList,
    NameRef,
    Literal,
    ErrorNode,
}

impl SyntaxKind {
    /// Whitespace or a comment.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            SyntaxKind::Whitespace | SyntaxKind::LineComment | SyntaxKind::BlockComment
        )
    }
}
