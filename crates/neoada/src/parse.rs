//! Recursive-descent parser: token stream → [`AstNode`] tree.
//!
//! One function per grammar production, precedence climbing for expressions. `volatile` and
//! `when` are not reserved words (the keyword set doesn't include them); both are recognized
//! contextually by matching an `Identifier` token's lowered text in exactly the position the
//! grammar allows one, the same way the lexer treats them.

use crate::ast::{AstKind, AstNode};
use crate::error::{NeoAdaError, SyntaxError};
use crate::ident::Ident;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

pub struct Parser<'src> {
    lexer: Lexer<'src>,
    last_line: u32,
    last_column: u32,
}

/// Parses a complete program from source text.
pub fn parse_program(source: &str) -> Result<AstNode, NeoAdaError> {
    Parser::new(source).parse_program()
}

impl<'src> Parser<'src> {
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            lexer: Lexer::new(source),
            last_line: 1,
            last_column: 1,
        }
    }

    fn peek(&mut self) -> Result<Option<Token>, NeoAdaError> {
        Ok(self.lexer.peek()?.cloned())
    }

    fn peek_at(&mut self, n: usize) -> Result<Option<Token>, NeoAdaError> {
        Ok(self.lexer.peek_at(n)?.cloned())
    }

    fn advance(&mut self) -> Result<Token, NeoAdaError> {
        match self.lexer.advance()? {
            Some(token) => {
                self.last_line = token.line;
                self.last_column = token.column;
                Ok(token)
            }
            None => Err(SyntaxError::UnexpectedEof {
                line: self.last_line,
                column: self.last_column,
            }
            .into()),
        }
    }

    fn eof_loc(&self) -> (u32, u32) {
        (self.last_line, self.last_column)
    }

    fn is_keyword(&mut self, kw: &str) -> Result<bool, NeoAdaError> {
        Ok(matches!(self.peek()?, Some(tok) if tok.kind == TokenKind::Keyword && tok.lowered() == kw))
    }

    /// `volatile`/`when` aren't reserved; check the lowered text of a plain identifier.
    fn is_contextual(&mut self, word: &str) -> Result<bool, NeoAdaError> {
        Ok(matches!(self.peek()?, Some(tok) if tok.kind == TokenKind::Identifier && tok.lowered() == word))
    }

    fn is_operator(&mut self, op: &str) -> Result<bool, NeoAdaError> {
        Ok(matches!(self.peek()?, Some(tok) if tok.kind == TokenKind::Operator && tok.lexeme == op))
    }

    fn is_separator(&mut self, sep: &str) -> Result<bool, NeoAdaError> {
        Ok(matches!(self.peek()?, Some(tok) if tok.kind == TokenKind::Separator && tok.lexeme == sep))
    }

    fn expect_keyword(&mut self, kw: &'static str) -> Result<Token, NeoAdaError> {
        let token = self.advance()?;
        if token.kind == TokenKind::Keyword && token.lowered() == kw {
            Ok(token)
        } else {
            Err(SyntaxError::KeywordExpected {
                line: token.line,
                column: token.column,
                expected: kw,
                found: token.lexeme,
            }
            .into())
        }
    }

    fn expect_separator(&mut self, sep: &str) -> Result<Token, NeoAdaError> {
        let token = self.advance()?;
        if token.kind == TokenKind::Separator && token.lexeme == sep {
            Ok(token)
        } else {
            Err(SyntaxError::InvalidToken {
                line: token.line,
                column: token.column,
                found: token.lexeme,
            }
            .into())
        }
    }

    fn expect_operator(&mut self, op: &str) -> Result<Token, NeoAdaError> {
        let token = self.advance()?;
        if token.kind == TokenKind::Operator && token.lexeme == op {
            Ok(token)
        } else {
            Err(SyntaxError::InvalidToken {
                line: token.line,
                column: token.column,
                found: token.lexeme,
            }
            .into())
        }
    }

    fn expect_identifier(&mut self) -> Result<Token, NeoAdaError> {
        let token = self.advance()?;
        if token.kind == TokenKind::Identifier {
            Ok(token)
        } else {
            Err(SyntaxError::IdentifierExpected {
                line: token.line,
                column: token.column,
                found: token.lexeme,
            }
            .into())
        }
    }

    pub fn parse_program(&mut self) -> Result<AstNode, NeoAdaError> {
        let mut program = AstNode::new(AstKind::Program, "", 1, 1);
        while self.peek()?.is_some() {
            program.push(self.parse_statement()?);
        }
        Ok(program)
    }

    fn parse_block(&mut self, stop_keywords: &[&str]) -> Result<AstNode, NeoAdaError> {
        let (line, column) = self.eof_loc();
        let mut block = AstNode::new(AstKind::Block, "", line, column);
        loop {
            match self.peek()? {
                None => return Err(SyntaxError::UnexpectedEof { line, column }.into()),
                Some(tok) if tok.kind == TokenKind::Keyword && stop_keywords.contains(&tok.lowered().as_str()) => {
                    return Ok(block);
                }
                _ => block.push(self.parse_statement()?),
            }
        }
    }

    fn parse_statement(&mut self) -> Result<AstNode, NeoAdaError> {
        let Some(token) = self.peek()? else {
            let (line, column) = self.eof_loc();
            return Err(SyntaxError::UnexpectedEof { line, column }.into());
        };
        if token.kind == TokenKind::Keyword {
            return match token.lowered().as_str() {
                "declare" => self.parse_declaration(),
                "if" => self.parse_if(),
                "while" => self.parse_while(),
                "for" => self.parse_for(),
                "procedure" => self.parse_procedure_def(),
                "function" => self.parse_function_def(),
                "with" => self.parse_with(),
                "return" => self.parse_return(),
                "break" => self.parse_break_or_continue(AstKind::Break),
                "continue" => self.parse_break_or_continue(AstKind::Continue),
                _ => Err(SyntaxError::InvalidStatement {
                    line: token.line,
                    column: token.column,
                    found: token.lexeme,
                }
                .into()),
            };
        }
        if token.kind == TokenKind::Identifier {
            return self.parse_assignment_or_call();
        }
        Err(SyntaxError::InvalidStatement {
            line: token.line,
            column: token.column,
            found: token.lexeme,
        }
        .into())
    }

    fn parse_declaration(&mut self) -> Result<AstNode, NeoAdaError> {
        let start = self.expect_keyword("declare")?;
        let kind = if self.is_contextual("volatile")? {
            self.advance()?;
            AstKind::VolatileDeclaration
        } else {
            AstKind::Declaration
        };
        let name = self.expect_identifier()?;
        self.expect_separator(":")?;
        let type_name = self.expect_identifier()?;
        let mut node = AstNode::new(kind, name.lexeme.as_str(), start.line, start.column);
        node.push(AstNode::leaf(AstKind::Identifier, type_name.lexeme.as_str(), type_name.line, type_name.column));
        if self.is_operator(":=")? {
            self.advance()?;
            node.push(self.parse_expression()?);
        }
        self.expect_separator(";")?;
        Ok(node)
    }

    fn parse_assignment_or_call(&mut self) -> Result<AstNode, NeoAdaError> {
        let name = self.expect_identifier()?;
        let node = if self.is_separator("[")? {
            let access = self.parse_access_operator(&name)?;
            self.expect_operator(":=")?;
            let rhs = self.parse_expression()?;
            let mut assignment = AstNode::new(AstKind::Assignment, "", name.line, name.column);
            assignment.push(access);
            assignment.push(rhs);
            assignment
        } else if self.is_operator(":=")? {
            self.advance()?;
            let rhs = self.parse_expression()?;
            let mut assignment = AstNode::new(AstKind::Assignment, "", name.line, name.column);
            assignment.push(AstNode::leaf(AstKind::Identifier, name.lexeme.as_str(), name.line, name.column));
            assignment.push(rhs);
            assignment
        } else if self.is_separator("(")? {
            self.parse_call_args(AstKind::FunctionCall, name.lexeme.as_str(), None, name.line, name.column)?
        } else if self.is_separator(":")? {
            self.advance()?;
            let method = self.expect_identifier()?;
            self.parse_call_args(
                AstKind::StaticMethodCall,
                method.lexeme.as_str(),
                Some(name.lexeme.as_str()),
                name.line,
                name.column,
            )?
        } else if self.is_separator(".")? {
            self.advance()?;
            let method = self.expect_identifier()?;
            self.parse_call_args(
                AstKind::InstanceMethodCall,
                method.lexeme.as_str(),
                Some(name.lexeme.as_str()),
                name.line,
                name.column,
            )?
        } else {
            return Err(SyntaxError::InvalidStatement {
                line: name.line,
                column: name.column,
                found: name.lexeme,
            }
            .into());
        };
        self.expect_separator(";")?;
        Ok(node)
    }

    fn parse_access_operator(&mut self, name: &Token) -> Result<AstNode, NeoAdaError> {
        self.expect_separator("[")?;
        let index = self.parse_expression()?;
        self.expect_separator("]")?;
        let mut node = AstNode::new(AstKind::AccessOperator, "", name.line, name.column);
        node.push(AstNode::leaf(AstKind::Identifier, name.lexeme.as_str(), name.line, name.column));
        node.push(index);
        Ok(node)
    }

    fn parse_call_args(
        &mut self,
        kind: AstKind,
        called_name: &str,
        context_name: Option<&str>,
        line: u32,
        column: u32,
    ) -> Result<AstNode, NeoAdaError> {
        self.expect_separator("(")?;
        let args = self.parse_expr_list(")")?;
        self.expect_separator(")")?;
        let mut node = AstNode::new(kind, called_name, line, column);
        if let Some(context_name) = context_name {
            node.push(AstNode::leaf(AstKind::MethodContext, context_name, line, column));
        }
        for arg in args {
            node.push(arg);
        }
        Ok(node)
    }

    fn parse_expr_list(&mut self, closing_separator: &str) -> Result<Vec<AstNode>, NeoAdaError> {
        let mut items = Vec::new();
        if self.is_separator(closing_separator)? {
            return Ok(items);
        }
        items.push(self.parse_expression()?);
        while self.is_separator(",")? {
            self.advance()?;
            items.push(self.parse_expression()?);
        }
        Ok(items)
    }

    fn parse_if(&mut self) -> Result<AstNode, NeoAdaError> {
        let start = self.expect_keyword("if")?;
        let cond = self.parse_expression()?;
        self.expect_keyword("then")?;
        let block = self.parse_block(&["elsif", "else", "end"])?;
        let mut node = AstNode::new(AstKind::IfStatement, "", start.line, start.column);
        node.push(cond);
        node.push(block);
        while self.is_keyword("elsif")? {
            let elsif_tok = self.advance()?;
            let elsif_cond = self.parse_expression()?;
            self.expect_keyword("then")?;
            let elsif_block = self.parse_block(&["elsif", "else", "end"])?;
            let mut elsif = AstNode::new(AstKind::Elsif, "", elsif_tok.line, elsif_tok.column);
            elsif.push(elsif_cond);
            elsif.push(elsif_block);
            node.push(elsif);
        }
        if self.is_keyword("else")? {
            let else_tok = self.advance()?;
            let else_block = self.parse_block(&["end"])?;
            let mut else_node = AstNode::new(AstKind::Else, "", else_tok.line, else_tok.column);
            else_node.push(else_block);
            node.push(else_node);
        }
        self.expect_keyword("end")?;
        self.expect_keyword("if")?;
        self.expect_separator(";")?;
        Ok(node)
    }

    fn parse_while(&mut self) -> Result<AstNode, NeoAdaError> {
        let start = self.expect_keyword("while")?;
        let cond = self.parse_expression()?;
        self.expect_keyword("loop")?;
        let block = self.parse_block(&["end"])?;
        self.expect_keyword("end")?;
        self.expect_keyword("loop")?;
        self.expect_separator(";")?;
        let mut node = AstNode::new(AstKind::WhileLoop, "", start.line, start.column);
        node.push(cond);
        node.push(block);
        Ok(node)
    }

    fn parse_for(&mut self) -> Result<AstNode, NeoAdaError> {
        let start = self.expect_keyword("for")?;
        let var = self.expect_identifier()?;
        self.expect_keyword("in")?;
        let range = self.parse_range()?;
        self.expect_keyword("loop")?;
        let block = self.parse_block(&["end"])?;
        self.expect_keyword("end")?;
        self.expect_keyword("loop")?;
        self.expect_separator(";")?;
        let mut node = AstNode::new(AstKind::ForLoop, var.lexeme.as_str(), start.line, start.column);
        node.push(range);
        node.push(block);
        Ok(node)
    }

    fn parse_range(&mut self) -> Result<AstNode, NeoAdaError> {
        let from = self.parse_expression()?;
        let (line, column) = (from.line, from.column);
        if !self.is_operator("..")? {
            return Err(SyntaxError::InvalidRangeOrIterable { line, column }.into());
        }
        self.advance()?;
        let to = self.parse_expression()?;
        let mut node = AstNode::new(AstKind::Range, "", line, column);
        node.push(from);
        node.push(to);
        Ok(node)
    }

    fn parse_return(&mut self) -> Result<AstNode, NeoAdaError> {
        let start = self.expect_keyword("return")?;
        let mut node = AstNode::new(AstKind::Return, "", start.line, start.column);
        if !self.is_separator(";")? {
            node.push(self.parse_expression()?);
        }
        self.expect_separator(";")?;
        Ok(node)
    }

    fn parse_break_or_continue(&mut self, kind: AstKind) -> Result<AstNode, NeoAdaError> {
        let start = self.advance()?;
        let mut node = AstNode::new(kind, "", start.line, start.column);
        if self.is_contextual("when")? {
            self.advance()?;
            node.push(self.parse_expression()?);
        }
        self.expect_separator(";")?;
        Ok(node)
    }

    fn parse_with(&mut self) -> Result<AstNode, NeoAdaError> {
        let start = self.expect_keyword("with")?;
        let name_token = self.advance()?;
        if name_token.kind != TokenKind::String {
            return Err(SyntaxError::InvalidToken {
                line: name_token.line,
                column: name_token.column,
                found: name_token.lexeme,
            }
            .into());
        }
        self.expect_separator(";")?;
        Ok(AstNode::leaf(AstKind::WithAddon, name_token.lexeme.as_str(), start.line, start.column))
    }

    fn parse_formals(&mut self) -> Result<AstNode, NeoAdaError> {
        self.expect_separator("(")?;
        let (line, column) = self.eof_loc();
        let mut formals = AstNode::new(AstKind::FormalParameters, "", line, column);
        if !self.is_separator(")")? {
            formals.push(self.parse_formal()?);
            while self.is_separator(";")? {
                self.advance()?;
                formals.push(self.parse_formal()?);
            }
        }
        self.expect_separator(")")?;
        Ok(formals)
    }

    fn parse_formal(&mut self) -> Result<AstNode, NeoAdaError> {
        let name = self.expect_identifier()?;
        self.expect_separator(":")?;
        let mode = if self.is_keyword("in")? {
            let tok = self.advance()?;
            Some(AstNode::leaf(AstKind::FormalParameterMode, "in", tok.line, tok.column))
        } else if self.is_keyword("out")? {
            let tok = self.advance()?;
            Some(AstNode::leaf(AstKind::FormalParameterMode, "out", tok.line, tok.column))
        } else {
            None
        };
        let type_name = self.expect_identifier()?;
        let mut node = AstNode::new(AstKind::FormalParameter, name.lexeme.as_str(), name.line, name.column);
        node.push(AstNode::leaf(AstKind::Identifier, type_name.lexeme.as_str(), type_name.line, type_name.column));
        if let Some(mode) = mode {
            node.push(mode);
        }
        Ok(node)
    }

    fn parse_procedure_def(&mut self) -> Result<AstNode, NeoAdaError> {
        let start = self.expect_keyword("procedure")?;
        let first = self.expect_identifier()?;
        let (context, name) = if self.is_separator(":")? {
            self.advance()?;
            let real_name = self.expect_identifier()?;
            (Some(first), real_name)
        } else {
            (None, first)
        };
        let formals = self.parse_formals()?;
        self.expect_keyword("is")?;
        let block = self.parse_block(&["end"])?;
        self.expect_keyword("end")?;
        self.expect_identifier()?;
        self.expect_separator(";")?;
        let mut node = AstNode::new(AstKind::Procedure, name.lexeme.as_str(), start.line, start.column);
        if let Some(context) = context {
            node.push(AstNode::leaf(AstKind::MethodContext, context.lexeme.as_str(), context.line, context.column));
        }
        node.push(formals);
        node.push(block);
        Ok(node)
    }

    fn parse_function_def(&mut self) -> Result<AstNode, NeoAdaError> {
        let start = self.expect_keyword("function")?;
        let first = self.expect_identifier()?;
        let (context, name) = if self.is_separator(":")? {
            self.advance()?;
            let real_name = self.expect_identifier()?;
            (Some(first), real_name)
        } else {
            (None, first)
        };
        let formals = self.parse_formals()?;
        self.expect_keyword("return")?;
        let return_type = self.expect_identifier()?;
        self.expect_keyword("is")?;
        let block = self.parse_block(&["end"])?;
        self.expect_keyword("end")?;
        self.expect_identifier()?;
        self.expect_separator(";")?;
        let mut node = AstNode::new(AstKind::Function, name.lexeme.as_str(), start.line, start.column);
        if let Some(context) = context {
            node.push(AstNode::leaf(AstKind::MethodContext, context.lexeme.as_str(), context.line, context.column));
        }
        node.push(formals);
        node.push(AstNode::leaf(AstKind::Identifier, return_type.lexeme.as_str(), return_type.line, return_type.column));
        node.push(block);
        Ok(node)
    }

    // --- expressions, lowest to highest precedence ---

    fn parse_expression(&mut self) -> Result<AstNode, NeoAdaError> {
        self.parse_or_xor()
    }

    fn parse_or_xor(&mut self) -> Result<AstNode, NeoAdaError> {
        let mut left = self.parse_and()?;
        loop {
            let Some(token) = self.peek()? else { break };
            if token.kind == TokenKind::Keyword && matches!(token.lowered().as_str(), "or" | "xor") {
                self.advance()?;
                let right = self.parse_and()?;
                left = binary_op(token.lowered(), left, right);
            } else {
                break;
            }
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<AstNode, NeoAdaError> {
        let mut left = self.parse_equality()?;
        while self.is_keyword("and")? {
            let token = self.advance()?;
            let right = self.parse_equality()?;
            left = binary_op(token.lowered(), left, right);
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<AstNode, NeoAdaError> {
        let mut left = self.parse_relational()?;
        loop {
            let Some(token) = self.peek()? else { break };
            if token.kind == TokenKind::Operator && matches!(token.lexeme.as_str(), "=" | "<>" | "/=") {
                self.advance()?;
                let right = self.parse_relational()?;
                left = binary_op(token.lowered(), left, right);
            } else {
                break;
            }
        }
        Ok(left)
    }

    fn parse_relational(&mut self) -> Result<AstNode, NeoAdaError> {
        let mut left = self.parse_concat()?;
        loop {
            let Some(token) = self.peek()? else { break };
            if token.kind == TokenKind::Operator && matches!(token.lexeme.as_str(), "<" | "<=" | ">" | ">=") {
                self.advance()?;
                let right = self.parse_concat()?;
                left = binary_op(token.lowered(), left, right);
            } else {
                break;
            }
        }
        Ok(left)
    }

    fn parse_concat(&mut self) -> Result<AstNode, NeoAdaError> {
        let mut left = self.parse_additive()?;
        while self.is_operator("&")? {
            let token = self.advance()?;
            let right = self.parse_additive()?;
            left = binary_op(token.lowered(), left, right);
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<AstNode, NeoAdaError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let Some(token) = self.peek()? else { break };
            if token.kind == TokenKind::Operator && matches!(token.lexeme.as_str(), "+" | "-") {
                self.advance()?;
                let right = self.parse_multiplicative()?;
                left = binary_op(token.lowered(), left, right);
            } else {
                break;
            }
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<AstNode, NeoAdaError> {
        let mut left = self.parse_power()?;
        loop {
            let Some(token) = self.peek()? else { break };
            let is_mul_op = token.kind == TokenKind::Operator && matches!(token.lexeme.as_str(), "*" | "/");
            let is_mod_rem = token.kind == TokenKind::Keyword && matches!(token.lowered().as_str(), "mod" | "rem");
            if is_mul_op || is_mod_rem {
                self.advance()?;
                let right = self.parse_power()?;
                left = binary_op(token.lowered(), left, right);
            } else {
                break;
            }
        }
        Ok(left)
    }

    fn parse_power(&mut self) -> Result<AstNode, NeoAdaError> {
        let left = self.parse_unary()?;
        if self.is_operator("**")? {
            let token = self.advance()?;
            let right = self.parse_power()?;
            return Ok(binary_op(token.lowered(), left, right));
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<AstNode, NeoAdaError> {
        let Some(token) = self.peek()? else {
            let (line, column) = self.eof_loc();
            return Err(SyntaxError::UnexpectedEof { line, column }.into());
        };
        let is_unary = (token.kind == TokenKind::Operator && matches!(token.lexeme.as_str(), "+" | "-" | "#"))
            || (token.kind == TokenKind::Keyword && token.lowered() == "not");
        if is_unary {
            self.advance()?;
            let operand = self.parse_unary()?;
            let mut node = AstNode::new(AstKind::UnaryOperator, token.lowered().as_str(), token.line, token.column);
            node.push(operand);
            return Ok(node);
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<AstNode, NeoAdaError> {
        let token = self.advance()?;
        match token.kind {
            TokenKind::Number => Ok(AstNode::leaf(AstKind::Number, token.lexeme.as_str(), token.line, token.column)),
            TokenKind::String => Ok(AstNode::leaf(AstKind::Literal, token.lexeme.as_str(), token.line, token.column)),
            TokenKind::BooleanLiteral => Ok(AstNode::leaf(
                AstKind::BooleanLiteral,
                token.lexeme.as_str(),
                token.line,
                token.column,
            )),
            TokenKind::Separator if token.lexeme == "(" => {
                let inner = self.parse_expression()?;
                self.expect_separator(")")?;
                let mut node = AstNode::new(AstKind::Expression, "", token.line, token.column);
                node.push(inner);
                Ok(node)
            }
            TokenKind::Separator if token.lexeme == "[" => {
                let items = self.parse_expr_list("]")?;
                self.expect_separator("]")?;
                let mut node = AstNode::new(AstKind::ListLiteral, "", token.line, token.column);
                for item in items {
                    node.push(item);
                }
                Ok(node)
            }
            TokenKind::Identifier => self.parse_identifier_primary(token),
            _ => Err(SyntaxError::InvalidToken {
                line: token.line,
                column: token.column,
                found: token.lexeme,
            }
            .into()),
        }
    }

    fn parse_identifier_primary(&mut self, name: Token) -> Result<AstNode, NeoAdaError> {
        if self.is_separator("(")? {
            return self.parse_call_args(AstKind::FunctionCall, name.lexeme.as_str(), None, name.line, name.column);
        }
        if self.is_separator("[")? {
            return self.parse_access_operator(&name);
        }
        if self.is_separator(":")? {
            self.advance()?;
            let method = self.expect_identifier()?;
            return self.parse_call_args(
                AstKind::StaticMethodCall,
                method.lexeme.as_str(),
                Some(name.lexeme.as_str()),
                name.line,
                name.column,
            );
        }
        if self.is_separator(".")? {
            self.advance()?;
            let method = self.expect_identifier()?;
            return self.parse_call_args(
                AstKind::InstanceMethodCall,
                method.lexeme.as_str(),
                Some(name.lexeme.as_str()),
                name.line,
                name.column,
            );
        }
        Ok(AstNode::leaf(AstKind::Identifier, name.lexeme.as_str(), name.line, name.column))
    }
}

fn binary_op(op_lowered: impl Into<Ident>, left: AstNode, right: AstNode) -> AstNode {
    let (line, column) = (left.line, left.column);
    let mut node = AstNode::new(AstKind::BinaryOperator, op_lowered, line, column);
    node.push(left);
    node.push(right);
    node
}

#[cfg(test)]
mod tests {
    use super::parse_program;
    use crate::ast::AstKind;

    #[test]
    fn parses_a_declaration_with_initializer() {
        let program = parse_program("declare x : Natural := 5;").unwrap();
        assert_eq!(program.children.len(), 1);
        let decl = &program.children[0];
        assert_eq!(decl.kind, AstKind::Declaration);
        assert_eq!(decl.value.display(), "x");
        assert_eq!(decl.children.len(), 2);
    }

    #[test]
    fn parses_volatile_declaration_contextually() {
        let program = parse_program("declare volatile y : Number;").unwrap();
        assert_eq!(program.children[0].kind, AstKind::VolatileDeclaration);
    }

    #[test]
    fn parses_if_elsif_else() {
        let program = parse_program(
            r"if true then
                declare a : Natural;
            elsif false then
                declare b : Natural;
            else
                declare c : Natural;
            end if;",
        )
        .unwrap();
        let node = &program.children[0];
        assert_eq!(node.kind, AstKind::IfStatement);
        assert_eq!(node.children.len(), 3);
        assert_eq!(node.children[1].kind, AstKind::Elsif);
        assert_eq!(node.children[2].kind, AstKind::Else);
    }

    #[test]
    fn parses_for_loop_range() {
        let program = parse_program("for i in 1..5 loop continue; end loop;").unwrap();
        let node = &program.children[0];
        assert_eq!(node.kind, AstKind::ForLoop);
        assert_eq!(node.value.display(), "i");
        assert_eq!(node.children[0].kind, AstKind::Range);
    }

    #[test]
    fn break_with_when_clause() {
        let program = parse_program("for i in 1..5 loop break when i = 3; end loop;").unwrap();
        let loop_body = &program.children[0].children[1];
        let break_stmt = &loop_body.children[0];
        assert_eq!(break_stmt.kind, AstKind::Break);
        assert_eq!(break_stmt.children.len(), 1);
    }

    #[test]
    fn operator_precedence_nests_correctly() {
        // 1 + 2 * 3 should parse as 1 + (2 * 3)
        let program = parse_program("declare r : Number := 1 + 2 * 3;").unwrap();
        let init = &program.children[0].children[1];
        assert_eq!(init.kind, AstKind::BinaryOperator);
        assert_eq!(init.value.display(), "+");
        assert_eq!(init.children[1].value.display(), "*");
    }

    #[test]
    fn power_is_right_associative() {
        let program = parse_program("declare r : Number := 2 ** 3 ** 2;").unwrap();
        let init = &program.children[0].children[1];
        assert_eq!(init.kind, AstKind::BinaryOperator);
        assert_eq!(init.children[1].kind, AstKind::BinaryOperator);
    }

    #[test]
    fn parses_static_and_instance_method_calls() {
        let program = parse_program(
            r#"declare s : String;
            s.length();
            list:create();"#,
        )
        .unwrap();
        assert_eq!(program.children[1].kind, AstKind::InstanceMethodCall);
        assert_eq!(program.children[2].kind, AstKind::StaticMethodCall);
    }

    #[test]
    fn parses_function_definition() {
        let program = parse_program(
            r"function add(a : in Number; b : in Number) return Number is
                return a + b;
            end add;",
        )
        .unwrap();
        let func = &program.children[0];
        assert_eq!(func.kind, AstKind::Function);
        assert_eq!(func.value.display(), "add");
    }

    #[test]
    fn invalid_range_without_ellipsis_is_an_error() {
        let err = parse_program("for i in 1 loop continue; end loop;").unwrap_err();
        assert!(err.to_string().contains("invalid range"));
    }
}
