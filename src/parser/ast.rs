// AST (Abstract Syntax Tree) definitions for Grongigo programs

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Suffix the parser appends to a declared type to mark an array.
pub const ARRAY_SUFFIX: &str = "[]";

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub declarations: Vec<Declaration>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }
}

/// Anything that may appear at the top level of a script
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Function(FunctionDecl),
    Variable(VarDecl),
    Statement(Stmt),
}

impl Declaration {
    pub fn location(&self) -> SourceLocation {
        match self {
            Declaration::Function(func) => func.location,
            Declaration::Variable(var) => var.location,
            Declaration::Statement(stmt) => stmt.location(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub return_type: String,
    pub name: String,
    pub params: Vec<Parameter>,
    pub body: Block,
    pub location: SourceLocation,
}

/// Function parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub param_type: String,
    pub name: String,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    /// Target type name, carrying [`ARRAY_SUFFIX`] for array declarations.
    pub var_type: String,
    pub name: String,
    pub init: Option<Expr>,
    pub location: SourceLocation,
}

impl VarDecl {
    /// Element type of an array declaration, `None` for scalars.
    pub fn array_element_type(&self) -> Option<&str> {
        self.var_type.strip_suffix(ARRAY_SUFFIX)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub location: SourceLocation,
}

/// Switch case
#[derive(Debug, Clone, PartialEq)]
pub struct CaseClause {
    pub value: Expr,
    pub statements: Vec<Stmt>,
    pub location: SourceLocation,
}

/// First clause of a parenthesized `for`
#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    VarDecl(VarDecl),
    Expr(Expr),
}

/// AST nodes representing statements
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(Block),
    VarDecl(VarDecl),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
        location: SourceLocation,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
        location: SourceLocation,
    },
    For {
        init: Option<ForInit>,
        condition: Option<Expr>,
        update: Option<Expr>,
        body: Box<Stmt>,
        location: SourceLocation,
    },
    Switch {
        subject: Expr,
        cases: Vec<CaseClause>,
        default_case: Option<Vec<Stmt>>,
        location: SourceLocation,
    },
    Return {
        value: Option<Expr>,
        location: SourceLocation,
    },
    Break {
        location: SourceLocation,
    },
    Continue {
        location: SourceLocation,
    },
    Expression {
        expr: Expr,
        location: SourceLocation,
    },
}

impl Stmt {
    /// Get the source location of this node
    pub fn location(&self) -> SourceLocation {
        match self {
            Stmt::Block(block) => block.location,
            Stmt::VarDecl(var) => var.location,
            Stmt::If { location, .. }
            | Stmt::While { location, .. }
            | Stmt::For { location, .. }
            | Stmt::Switch { location, .. }
            | Stmt::Return { location, .. }
            | Stmt::Break { location }
            | Stmt::Continue { location }
            | Stmt::Expression { location, .. } => *location,
        }
    }
}

/// Value of a number literal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

/// AST nodes representing expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary {
        left: Box<Expr>,
        op: String,
        right: Box<Expr>,
        location: SourceLocation,
    },
    Unary {
        op: String,
        operand: Box<Expr>,
        prefix: bool,
        location: SourceLocation,
    },
    Assign {
        target: Box<Expr>,
        value: Box<Expr>,
        location: SourceLocation,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
        location: SourceLocation,
    },
    Index {
        array: Box<Expr>,
        index: Box<Expr>,
        location: SourceLocation,
    },
    Identifier(String, SourceLocation),
    Number(Number, SourceLocation),
    StringLiteral(String, SourceLocation),
    /// Empty value stands for NUL
    CharLiteral(String, SourceLocation),
}

impl Expr {
    /// Get the source location of this node
    pub fn location(&self) -> SourceLocation {
        match self {
            Expr::Binary { location, .. }
            | Expr::Unary { location, .. }
            | Expr::Assign { location, .. }
            | Expr::Call { location, .. }
            | Expr::Index { location, .. } => *location,
            Expr::Identifier(_, loc)
            | Expr::Number(_, loc)
            | Expr::StringLiteral(_, loc)
            | Expr::CharLiteral(_, loc) => *loc,
        }
    }
}
