//! Packed LALR(1) tables for the SQL grammar.
//!
//! The arrays below are the output of the grammar compiler and are not
//! meant to be edited by hand. Lookups over them live in
//! [`GrammarTables`](super::GrammarTables).

use super::{GrammarTables, RuleInfo, Symbol};

/// Tables driving [`SqlActions`](crate::actions::SqlActions).
pub static SQL_GRAMMAR: GrammarTables = GrammarTables {
    state_count: 423,
    rule_count: 305,
    terminal_count: 137,
    symbol_count: 234,
    min_shift_reduce: 619,
    min_reduce: 924,
    error_action: 1229,
    accept_action: 1230,
    no_action: 1231,
    wildcard: Some(tk::ANY),
    error_symbol: None,
    action: &ACTION,
    lookahead: &LOOKAHEAD,
    shift_offset: &SHIFT_OFFSET,
    reduce_offset: &REDUCE_OFFSET,
    default_action: &DEFAULT_ACTION,
    fallback: &FALLBACK,
    rules: &RULES,
    symbol_names: &SYMBOL_NAMES,
    rule_names: &RULE_NAMES,
};

/// Terminal symbol codes produced by the lexer.
pub mod tk {
    use super::Symbol;

    pub const EOF: Symbol = 0;
    pub const SEMI: Symbol = 1;
    pub const EXPLAIN: Symbol = 2;
    pub const QUERY: Symbol = 3;
    pub const PLAN: Symbol = 4;
    pub const OR: Symbol = 5;
    pub const AND: Symbol = 6;
    pub const NOT: Symbol = 7;
    pub const IS: Symbol = 8;
    pub const MATCH: Symbol = 9;
    pub const LIKE_KW: Symbol = 10;
    pub const BETWEEN: Symbol = 11;
    pub const IN: Symbol = 12;
    pub const ISNULL: Symbol = 13;
    pub const NOTNULL: Symbol = 14;
    pub const NE: Symbol = 15;
    pub const EQ: Symbol = 16;
    pub const GT: Symbol = 17;
    pub const LE: Symbol = 18;
    pub const LT: Symbol = 19;
    pub const GE: Symbol = 20;
    pub const ESCAPE: Symbol = 21;
    pub const BITAND: Symbol = 22;
    pub const BITOR: Symbol = 23;
    pub const LSHIFT: Symbol = 24;
    pub const RSHIFT: Symbol = 25;
    pub const PLUS: Symbol = 26;
    pub const MINUS: Symbol = 27;
    pub const STAR: Symbol = 28;
    pub const SLASH: Symbol = 29;
    pub const REM: Symbol = 30;
    pub const CONCAT: Symbol = 31;
    pub const COLLATE: Symbol = 32;
    pub const BITNOT: Symbol = 33;
    pub const BEGIN: Symbol = 34;
    pub const TRANSACTION: Symbol = 35;
    pub const DEFERRED: Symbol = 36;
    pub const COMMIT: Symbol = 37;
    pub const END: Symbol = 38;
    pub const ROLLBACK: Symbol = 39;
    pub const SAVEPOINT: Symbol = 40;
    pub const RELEASE: Symbol = 41;
    pub const TO: Symbol = 42;
    pub const TABLE: Symbol = 43;
    pub const CREATE: Symbol = 44;
    pub const IF: Symbol = 45;
    pub const EXISTS: Symbol = 46;
    pub const LP: Symbol = 47;
    pub const RP: Symbol = 48;
    pub const AS: Symbol = 49;
    pub const WITHOUT: Symbol = 50;
    pub const COMMA: Symbol = 51;
    pub const ID: Symbol = 52;
    pub const INDEXED: Symbol = 53;
    pub const ABORT: Symbol = 54;
    pub const ACTION: Symbol = 55;
    pub const ADD: Symbol = 56;
    pub const AFTER: Symbol = 57;
    pub const AUTOINCREMENT: Symbol = 58;
    pub const BEFORE: Symbol = 59;
    pub const CASCADE: Symbol = 60;
    pub const CONFLICT: Symbol = 61;
    pub const FAIL: Symbol = 62;
    pub const IGNORE: Symbol = 63;
    pub const INITIALLY: Symbol = 64;
    pub const INSTEAD: Symbol = 65;
    pub const NO: Symbol = 66;
    pub const KEY: Symbol = 67;
    pub const OFFSET: Symbol = 68;
    pub const RAISE: Symbol = 69;
    pub const REPLACE: Symbol = 70;
    pub const RESTRICT: Symbol = 71;
    pub const REINDEX: Symbol = 72;
    pub const RENAME: Symbol = 73;
    pub const CTIME_KW: Symbol = 74;
    pub const ANY: Symbol = 75;
    pub const STRING: Symbol = 76;
    pub const JOIN_KW: Symbol = 77;
    pub const CONSTRAINT: Symbol = 78;
    pub const DEFAULT: Symbol = 79;
    pub const NULL: Symbol = 80;
    pub const PRIMARY: Symbol = 81;
    pub const UNIQUE: Symbol = 82;
    pub const CHECK: Symbol = 83;
    pub const REFERENCES: Symbol = 84;
    pub const AUTOINCR: Symbol = 85;
    pub const ON: Symbol = 86;
    pub const INSERT: Symbol = 87;
    pub const DELETE: Symbol = 88;
    pub const UPDATE: Symbol = 89;
    pub const SET: Symbol = 90;
    pub const DEFERRABLE: Symbol = 91;
    pub const IMMEDIATE: Symbol = 92;
    pub const FOREIGN: Symbol = 93;
    pub const DROP: Symbol = 94;
    pub const VIEW: Symbol = 95;
    pub const UNION: Symbol = 96;
    pub const ALL: Symbol = 97;
    pub const EXCEPT: Symbol = 98;
    pub const INTERSECT: Symbol = 99;
    pub const SELECT: Symbol = 100;
    pub const VALUES: Symbol = 101;
    pub const DISTINCT: Symbol = 102;
    pub const DOT: Symbol = 103;
    pub const FROM: Symbol = 104;
    pub const JOIN: Symbol = 105;
    pub const BY: Symbol = 106;
    pub const USING: Symbol = 107;
    pub const ORDER: Symbol = 108;
    pub const ASC: Symbol = 109;
    pub const DESC: Symbol = 110;
    pub const GROUP: Symbol = 111;
    pub const HAVING: Symbol = 112;
    pub const LIMIT: Symbol = 113;
    pub const WHERE: Symbol = 114;
    pub const INTO: Symbol = 115;
    pub const FLOAT: Symbol = 116;
    pub const BLOB: Symbol = 117;
    pub const INTEGER: Symbol = 118;
    pub const VARIABLE: Symbol = 119;
    pub const CAST: Symbol = 120;
    pub const CASE: Symbol = 121;
    pub const WHEN: Symbol = 122;
    pub const THEN: Symbol = 123;
    pub const ELSE: Symbol = 124;
    pub const INDEX: Symbol = 125;
    pub const PRAGMA: Symbol = 126;
    pub const TRIGGER: Symbol = 127;
    pub const OF: Symbol = 128;
    pub const FOR: Symbol = 129;
    pub const EACH: Symbol = 130;
    pub const ROW: Symbol = 131;
    pub const ANALYZE: Symbol = 132;
    pub const ALTER: Symbol = 133;
    pub const COLUMNKW: Symbol = 134;
    pub const WITH: Symbol = 135;
    pub const RECURSIVE: Symbol = 136;
}

/// Nonterminal symbol codes.
pub mod nt {
    use super::Symbol;

    pub const ERROR: Symbol = 137;
    pub const INPUT: Symbol = 138;
    pub const ECMD: Symbol = 139;
    pub const EXPLAIN: Symbol = 140;
    pub const CMDX: Symbol = 141;
    pub const CMD: Symbol = 142;
    pub const TRANSTYPE: Symbol = 143;
    pub const TRANS_OPT: Symbol = 144;
    pub const NM: Symbol = 145;
    pub const SAVEPOINT_OPT: Symbol = 146;
    pub const CREATE_TABLE: Symbol = 147;
    pub const CREATE_TABLE_ARGS: Symbol = 148;
    pub const CREATEKW: Symbol = 149;
    pub const IFNOTEXISTS: Symbol = 150;
    pub const COLUMNLIST: Symbol = 151;
    pub const CONSLIST_OPT: Symbol = 152;
    pub const TABLE_OPTIONS: Symbol = 153;
    pub const SELECT: Symbol = 154;
    pub const COLUMNNAME: Symbol = 155;
    pub const CARGLIST: Symbol = 156;
    pub const TYPETOKEN: Symbol = 157;
    pub const TYPENAME: Symbol = 158;
    pub const SIGNED: Symbol = 159;
    pub const PLUS_NUM: Symbol = 160;
    pub const MINUS_NUM: Symbol = 161;
    pub const CCONS: Symbol = 162;
    pub const TERM: Symbol = 163;
    pub const EXPR: Symbol = 164;
    pub const ONCONF: Symbol = 165;
    pub const SORTORDER: Symbol = 166;
    pub const AUTOINC: Symbol = 167;
    pub const EIDLIST_OPT: Symbol = 168;
    pub const REFARGS: Symbol = 169;
    pub const DEFER_SUBCLAUSE: Symbol = 170;
    pub const REFARG: Symbol = 171;
    pub const REFACT: Symbol = 172;
    pub const INIT_DEFERRED_PRED_OPT: Symbol = 173;
    pub const CONSLIST: Symbol = 174;
    pub const TCONSCOMMA: Symbol = 175;
    pub const TCONS: Symbol = 176;
    pub const SORTLIST: Symbol = 177;
    pub const EIDLIST: Symbol = 178;
    pub const DEFER_SUBCLAUSE_OPT: Symbol = 179;
    pub const ORCONF: Symbol = 180;
    pub const RESOLVETYPE: Symbol = 181;
    pub const RAISETYPE: Symbol = 182;
    pub const IFEXISTS: Symbol = 183;
    pub const FULLNAME: Symbol = 184;
    pub const SELECTNOWITH: Symbol = 185;
    pub const ONESELECT: Symbol = 186;
    pub const WITH: Symbol = 187;
    pub const MULTISELECT_OP: Symbol = 188;
    pub const DISTINCT: Symbol = 189;
    pub const SELCOLLIST: Symbol = 190;
    pub const FROM: Symbol = 191;
    pub const WHERE_OPT: Symbol = 192;
    pub const GROUPBY_OPT: Symbol = 193;
    pub const HAVING_OPT: Symbol = 194;
    pub const ORDERBY_OPT: Symbol = 195;
    pub const LIMIT_OPT: Symbol = 196;
    pub const VALUES: Symbol = 197;
    pub const NEXPRLIST: Symbol = 198;
    pub const EXPRLIST: Symbol = 199;
    pub const SCLP: Symbol = 200;
    pub const AS: Symbol = 201;
    pub const SELTABLIST: Symbol = 202;
    pub const STL_PREFIX: Symbol = 203;
    pub const JOINOP: Symbol = 204;
    pub const INDEXED_OPT: Symbol = 205;
    pub const ON_OPT: Symbol = 206;
    pub const USING_OPT: Symbol = 207;
    pub const IDLIST: Symbol = 208;
    pub const SETLIST: Symbol = 209;
    pub const INSERT_CMD: Symbol = 210;
    pub const IDLIST_OPT: Symbol = 211;
    pub const LIKEOP: Symbol = 212;
    pub const BETWEEN_OP: Symbol = 213;
    pub const IN_OP: Symbol = 214;
    pub const PAREN_EXPRLIST: Symbol = 215;
    pub const CASE_OPERAND: Symbol = 216;
    pub const CASE_EXPRLIST: Symbol = 217;
    pub const CASE_ELSE: Symbol = 218;
    pub const UNIQUEFLAG: Symbol = 219;
    pub const COLLATE: Symbol = 220;
    pub const NMNUM: Symbol = 221;
    pub const TRIGGER_DECL: Symbol = 222;
    pub const TRIGGER_CMD_LIST: Symbol = 223;
    pub const TRIGGER_TIME: Symbol = 224;
    pub const TRIGGER_EVENT: Symbol = 225;
    pub const FOREACH_CLAUSE: Symbol = 226;
    pub const WHEN_CLAUSE: Symbol = 227;
    pub const TRIGGER_CMD: Symbol = 228;
    pub const TRNM: Symbol = 229;
    pub const TRIDXBY: Symbol = 230;
    pub const ADD_COLUMN_FULLNAME: Symbol = 231;
    pub const KWCOLUMN_OPT: Symbol = 232;
    pub const WQLIST: Symbol = 233;
}

#[rustfmt::skip]
static ACTION: [u16; 1462] = [
       91,    92,   295,    82,   790,   790,   802,   805,   794,   794,    89,    89,
       90,    90,    90,    90,   186,    88,    88,    88,    88,    87,    87,    86,
       86,    86,    85,   317,    90,    90,    90,    90,    83,    88,    88,    88,
       88,    87,    87,    86,    86,    86,    85,   317,   191,    85,   317,   909,
       90,    90,    90,    90,   317,    88,    88,    88,    88,    87,    87,    86,
       86,    86,    85,   317,    87,    87,    86,    86,    86,    85,   317,   909,
       86,    86,    86,    85,   317,    91,    92,   295,    82,   790,   790,   802,
      805,   794,   794,    89,    89,    90,    90,    90,    90,   297,    88,    88,
       88,    88,    87,    87,    86,    86,    86,    85,   317,    91,    92,   295,
       82,   790,   790,   802,   805,   794,   794,    89,    89,    90,    90,    90,
       90,   123,    88,    88,    88,    88,    87,    87,    86,    86,    86,    85,
      317,   620,   320,    91,    92,   295,    82,   790,   790,   802,   805,   794,
      794,    89,    89,    90,    90,    90,    90,    67,    88,    88,    88,    88,
       87,    87,    86,    86,    86,    85,   317,   710,  1230,   422,     3,   146,
       93,    84,    81,   166,   329,   282,    84,    81,   166,   291,   251,   315,
      314,   739,   740,   717,    91,    92,   295,    82,   790,   790,   802,   805,
      794,   794,    89,    89,    90,    90,    90,    90,   648,    88,    88,    88,
       88,    87,    87,    86,    86,    86,    85,   317,    88,    88,    88,    88,
       87,    87,    86,    86,    86,    85,   317,   845,   780,   844,   773,   656,
      123,   842,   767,   335,   651,    91,    92,   295,    82,   790,   790,   802,
      805,   794,   794,    89,    89,    90,    90,    90,    90,   650,    88,    88,
       88,    88,    87,    87,    86,    86,    86,    85,   317,   761,   211,   211,
      421,   421,   772,   772,   774,   917,   229,   917,   140,   738,   381,   901,
      649,   697,   244,   342,   243,   273,    91,    92,   295,    82,   790,   790,
      802,   805,   794,   794,    89,    89,    90,    90,    90,    90,   667,    88,
       88,    88,    88,    87,    87,    86,    86,    86,    85,   317,    22,   761,
      182,   737,   304,   368,   365,   364,   347,    84,    81,   166,   413,   413,
      413,   781,   123,   363,   244,   342,   243,    91,    92,   295,    82,   790,
      790,   802,   805,   794,   794,    89,    89,    90,    90,    90,    90,   864,
       88,    88,    88,    88,    87,    87,    86,    86,    86,    85,   317,    84,
       81,   166,   865,   415,   684,   663,   670,   316,   316,   316,   866,   690,
      369,   684,   766,   192,   123,   671,   691,   666,    91,    92,   295,    82,
      790,   790,   802,   805,   794,   794,    89,    89,    90,    90,    90,    90,
      307,    88,    88,    88,    88,    87,    87,    86,    86,    86,    85,   317,
       91,    92,   295,    82,   790,   790,   802,   805,   794,   794,    89,    89,
       90,    90,    90,    90,   388,    88,    88,    88,    88,    87,    87,    86,
       86,    86,    85,   317,    91,    92,   295,    82,   790,   790,   802,   805,
      794,   794,    89,    89,    90,    90,    90,    90,   164,    88,    88,    88,
       88,    87,    87,    86,    86,    86,    85,   317,    91,    92,   295,    82,
      790,   790,   802,   805,   794,   794,    89,    89,    90,    90,    90,    90,
      147,    88,    88,    88,    88,    87,    87,    86,    86,    86,    85,   317,
      848,   848,   337,   908,  1181,  1181,    70,   295,    82,   790,   790,   802,
      805,   794,   794,    89,    89,    90,    90,    90,    90,   351,    88,    88,
       88,    88,    87,    87,    86,    86,    86,    85,   317,   665,    73,   791,
      791,   803,   806,   123,    91,    80,   295,    82,   790,   790,   802,   805,
      794,   794,    89,    89,    90,    90,    90,    90,   155,    88,    88,    88,
       88,    87,    87,    86,    86,    86,    85,   317,    92,   295,    82,   790,
      790,   802,   805,   794,   794,    89,    89,    90,    90,    90,    90,    78,
       88,    88,    88,    88,    87,    87,    86,    86,    86,    85,   317,    78,
      228,   378,   416,   270,   309,   416,    75,    76,   897,   216,   795,   641,
      641,    77,   395,   861,   658,   108,    75,    76,    10,    10,   646,    48,
       48,    77,   411,     2,  1124,   306,   689,   689,   318,   318,   303,   642,
      892,   182,   411,     2,   368,   365,   364,   345,   318,   318,   646,   111,
      111,   400,   687,   687,   363,   360,   780,   186,   418,   417,   394,   396,
      767,   400,   211,   211,   416,   272,   780,   416,   418,   417,   712,   343,
      767,   375,   381,   199,   157,   261,   371,   256,   370,   187,    30,    30,
       23,    47,    47,   330,   254,   341,   185,   184,   183,   873,   641,   641,
      772,   772,   774,   775,   414,    18,   191,   761,    78,   909,   111,   213,
      772,   772,   774,   775,   414,    18,   724,   123,    78,   376,   642,   892,
      244,   332,   232,    75,    76,   711,   723,   123,   416,   909,    77,   872,
      297,   228,   378,    75,    76,   254,   271,   416,   165,   416,    77,   411,
        2,   416,    48,    48,   223,   318,   318,   641,   641,   409,   870,   411,
        2,    48,    48,    48,    48,   318,   318,    48,    48,   231,   400,     5,
      724,   191,   345,   780,   909,   418,   417,   642,   892,   767,   400,   765,
      723,   394,   379,   780,   325,   418,   417,   641,   641,   767,   416,   205,
      394,   384,   394,   393,   909,   289,   394,   374,   287,   286,   285,   202,
      283,   416,   839,   633,    10,    10,   146,   642,   892,   772,   772,   774,
      775,   414,    18,   214,   290,    68,   305,    10,    10,   772,   772,   774,
      775,   414,    18,   641,   641,   137,   217,   170,   299,   219,   641,   641,
       75,    76,   336,   138,   227,    24,   416,    77,   641,   641,   641,   641,
      315,   314,    54,   642,   892,   296,   416,   699,   411,     2,   642,   892,
       48,    48,   318,   318,   641,   641,   381,   143,   642,   892,   642,   892,
       48,    48,   641,   641,     1,   640,   298,   400,   726,   641,   641,   249,
      780,   172,   418,   417,   642,   892,   767,   168,   324,   723,   123,   310,
      833,   327,   642,   892,   328,   916,   416,   237,   758,   642,   892,   389,
      914,   723,   915,   723,   327,   326,   861,   835,   837,   725,   159,   158,
       10,    10,   825,   146,   382,   723,   772,   772,   774,   775,   414,    18,
      215,   294,   391,   248,   206,   111,   917,    95,   917,   383,     9,     9,
      652,   652,   208,   111,   867,   724,   333,   351,   220,   723,   220,   236,
      864,    66,   377,   416,   702,   702,   723,   416,   696,   416,   780,   240,
      773,   272,   343,   865,   767,   327,   111,   165,   835,    34,    34,   866,
      399,    35,    35,    36,    36,   235,   856,   234,   352,   188,   163,   661,
      323,   416,   723,   416,   260,   416,   765,   416,   707,   692,   416,   724,
      416,   706,   416,   259,   772,   772,   774,    37,    37,    38,    38,    26,
       26,    27,    27,   416,    29,    29,    39,    39,    40,    40,   416,   855,
      416,   351,   416,   273,   416,   239,   416,   242,   416,    41,    41,   321,
      416,   765,   894,   263,    11,    11,    42,    42,    97,    97,    43,    43,
       44,    44,    31,    31,   416,   405,    45,    45,   416,   300,   398,   416,
      313,   416,   894,   416,   373,   416,   412,   298,   416,   859,    46,    46,
      416,   354,    32,    32,   416,   113,   113,   114,   114,   115,   115,    52,
       52,   416,    33,    33,   416,   765,    98,    98,   765,   160,    49,    49,
      416,    74,   416,    72,   301,   416,   111,    99,    99,   416,   100,   100,
      416,   218,   416,   355,   416,   695,    96,    96,   112,   112,   416,   110,
      110,   416,   385,   104,   104,   416,   103,   103,   101,   101,   102,   102,
      416,   707,   349,   416,    51,    51,   706,    53,    53,   210,   163,    50,
       50,   356,   111,    20,   353,   637,    25,    25,   302,    28,    28,   311,
       64,   402,  1205,   406,   410,   679,   739,   740,   109,   659,   151,   763,
      386,   344,   190,   346,   190,   245,   190,   676,    66,   841,    19,   841,
      350,   361,   111,   252,   195,   212,    66,   669,   668,   659,   111,   704,
      111,   111,    69,   733,   832,   828,   190,   840,   195,   840,   644,   776,
      274,   107,   340,   247,   632,   250,   680,   664,   255,   731,   764,   713,
      397,   275,   771,   647,   832,   639,   630,   629,   631,   886,   265,   776,
      267,   148,   753,   677,     7,   331,   233,   161,   858,   241,   348,   269,
      401,   946,   366,   280,   156,   889,   923,   124,   258,   135,   830,   829,
      663,   121,    64,   334,   145,   843,    55,   339,   359,   238,   149,   144,
      174,   372,   126,   357,   178,   292,   179,   128,   129,   130,   131,   139,
      760,   308,   180,   750,   674,   683,   661,   387,   860,   824,    63,   682,
        6,   681,    71,   312,   392,    94,   293,    65,   654,   655,   390,   257,
      200,   721,    21,   887,   262,   204,   653,   899,   419,   722,   673,   264,
      636,   720,   404,   266,   201,   224,   719,   810,   408,   203,   420,   225,
      625,   627,   626,   116,   117,   623,   106,   288,   221,   118,   622,   319,
      230,   167,   322,   105,   169,   838,   836,   171,   759,   125,   703,   119,
      276,   277,   278,   268,   279,   127,   173,   693,   846,   190,   919,   132,
      133,   854,   338,    56,   134,    57,    58,   136,   226,    59,   857,   120,
      175,   853,   176,     8,    12,   177,   246,   635,   150,   358,   181,   259,
      141,   362,    60,    13,   367,   672,   253,    14,    61,   222,   779,    15,
      122,   701,   619,   778,   808,  1186,   162,   705,     4,    62,   207,   380,
      189,   209,   142,    16,   732,   727,   823,    69,    66,    17,   809,   807,
      193,   863,   812,   862,   194,   403,   879,   152,   197,   880,   196,   407,
      153,   284,   811,   154,   926,   777,   645,    79,   926,   198,   281,   926,
      926,   926,  1197,   926,   926,   926,   926,   926,   926,   926,   926,   926,
      926,   926,   926,   926,   926,   926,   926,   926,   926,   947,
];

#[rustfmt::skip]
static LOOKAHEAD: [u8; 1462] = [
       5,    6,    7,    8,    9,   10,   11,   12,   13,   14,   15,   16,   17,   18,   19,   20,
       9,   22,   23,   24,   25,   26,   27,   28,   29,   30,   31,   32,   17,   18,   19,   20,
      21,   22,   23,   24,   25,   26,   27,   28,   29,   30,   31,   32,   49,   31,   32,   52,
      17,   18,   19,   20,   32,   22,   23,   24,   25,   26,   27,   28,   29,   30,   31,   32,
      26,   27,   28,   29,   30,   31,   32,   76,   28,   29,   30,   31,   32,    5,    6,    7,
       8,    9,   10,   11,   12,   13,   14,   15,   16,   17,   18,   19,   20,   86,   22,   23,
      24,   25,   26,   27,   28,   29,   30,   31,   32,    5,    6,    7,    8,    9,   10,   11,
      12,   13,   14,   15,   16,   17,   18,   19,   20,  135,   22,   23,   24,   25,   26,   27,
      28,   29,   30,   31,   32,    1,    2,    5,    6,    7,    8,    9,   10,   11,   12,   13,
      14,   15,   16,   17,   18,   19,   20,   51,   22,   23,   24,   25,   26,   27,   28,   29,
      30,   31,   32,  201,  138,  139,  140,  145,   68,  212,  213,  214,   79,  151,  212,  213,
     214,  155,   48,   26,   27,  109,  110,  204,    5,    6,    7,    8,    9,   10,   11,   12,
      13,   14,   15,   16,   17,   18,   19,   20,  163,   22,   23,   24,   25,   26,   27,   28,
      29,   30,   31,   32,   22,   23,   24,   25,   26,   27,   28,   29,   30,   31,   32,   57,
      74,   59,   76,   48,  135,   38,   80,   65,  163,    5,    6,    7,    8,    9,   10,   11,
      12,   13,   14,   15,   16,   17,   18,   19,   20,  163,   22,   23,   24,   25,   26,   27,
      28,   29,   30,   31,   32,   70,  185,  186,  141,  142,  116,  117,  118,  116,  147,  118,
     149,  166,  197,  176,   48,  154,   87,   88,   89,  145,    5,    6,    7,    8,    9,   10,
      11,   12,   13,   14,   15,   16,   17,   18,   19,   20,  172,   22,   23,   24,   25,   26,
      27,   28,   29,   30,   31,   32,  187,   70,   78,  166,  178,   81,   82,   83,  145,  212,
     213,  214,  159,  160,  161,   48,  135,   93,   87,   88,   89,    5,    6,    7,    8,    9,
      10,   11,   12,   13,   14,   15,   16,   17,   18,   19,   20,   39,   22,   23,   24,   25,
      26,   27,   28,   29,   30,   31,   32,  212,  213,  214,   54,  145,  170,  171,   60,  159,
     160,  161,   62,   63,   66,  179,   48,  145,  135,   71,   70,  172,    5,    6,    7,    8,
       9,   10,   11,   12,   13,   14,   15,   16,   17,   18,   19,   20,   90,   22,   23,   24,
      25,   26,   27,   28,   29,   30,   31,   32,    5,    6,    7,    8,    9,   10,   11,   12,
      13,   14,   15,   16,   17,   18,   19,   20,  145,   22,   23,   24,   25,   26,   27,   28,
      29,   30,   31,   32,    5,    6,    7,    8,    9,   10,   11,   12,   13,   14,   15,   16,
      17,   18,   19,   20,  145,   22,   23,   24,   25,   26,   27,   28,   29,   30,   31,   32,
       5,    6,    7,    8,    9,   10,   11,   12,   13,   14,   15,   16,   17,   18,   19,   20,
      49,   22,   23,   24,   25,   26,   27,   28,   29,   30,   31,   32,   87,   88,   89,   51,
     100,  101,  123,    7,    8,    9,   10,   11,   12,   13,   14,   15,   16,   17,   18,   19,
      20,  145,   22,   23,   24,   25,   26,   27,   28,   29,   30,   31,   32,  172,  123,    9,
      10,   11,   12,  135,    5,    6,    7,    8,    9,   10,   11,   12,   13,   14,   15,   16,
      17,   18,   19,   20,  104,   22,   23,   24,   25,   26,   27,   28,   29,   30,   31,   32,
       6,    7,    8,    9,   10,   11,   12,   13,   14,   15,   16,   17,   18,   19,   20,    7,
      22,   23,   24,   25,   26,   27,   28,   29,   30,   31,   32,    7,  100,  101,  145,  145,
       7,  145,   26,   27,  162,  229,   80,   52,   53,   33,  154,  154,  170,   47,   26,   27,
     163,  164,   52,  163,  164,   33,   46,   47,   48,   32,  181,  182,   52,   53,  177,   76,
      77,   78,   46,   47,   81,   82,   83,  145,   52,   53,   76,  187,  187,   69,  181,  182,
      93,    7,   74,    9,   76,   77,  198,  199,   80,   69,  185,  186,  145,  145,   74,  145,
      76,   77,   28,  210,   80,  154,  197,   78,   79,   80,   81,   82,   83,   84,  163,  164,
     223,  163,  164,  210,   91,  228,   87,   88,   89,  145,   52,   53,  116,  117,  118,  119,
     120,  121,   49,   70,    7,   52,  187,  209,  116,  117,  118,  119,  120,  121,   51,  135,
       7,  198,   76,   77,   87,   88,   89,   26,   27,   28,  145,  135,  145,   76,   33,  145,
      86,  100,  101,   26,   27,   91,  216,  145,   77,  145,   33,   46,   47,  145,  163,  164,
     201,   52,   53,   52,   53,  233,  145,   46,   47,  163,  164,  163,  164,   52,   53,  163,
     164,  184,   69,   47,  105,   49,  145,   74,   52,   76,   77,   76,   77,   80,   69,  145,
     145,  198,  199,   74,  145,   76,   77,   52,   53,   80,  145,  224,  198,  199,  198,  199,
      76,   34,  198,  199,   37,   38,   39,   40,   41,  145,  145,   44,  163,  164,  145,   76,
      77,  116,  117,  118,  119,  120,  121,  184,  155,    7,  177,  163,  164,  116,  117,  118,
     119,  120,  121,   52,   53,   47,  209,   72,  145,  177,   52,   53,   26,   27,  208,   47,
     190,   47,  145,   33,   52,   53,   52,   53,   26,   27,  200,   76,   77,   94,  145,  186,
      46,   47,   76,   77,  163,  164,   52,   53,   52,   53,  197,  136,   76,   77,   76,   77,
     163,  164,   52,   53,   47,  157,  158,   69,  105,   52,   53,   43,   74,  126,   76,   77,
      76,   77,   80,  132,  133,  145,  135,  198,  145,  145,   76,   77,  145,   79,  145,   43,
     154,   76,   77,  198,   86,  145,   88,  145,  160,  161,  154,  160,  161,  105,   26,   27,
     163,  164,   82,  145,  145,  145,  116,  117,  118,  119,  120,  121,  184,  155,  177,   95,
     145,  187,  116,   47,  118,  154,  163,  164,   52,   53,   48,  187,  184,   51,  184,  145,
     174,  145,  176,   95,   39,   51,   96,  145,   98,   99,  145,  145,  184,  145,   74,  127,
      76,  145,  210,   54,   80,  221,  187,   77,  221,  163,  164,   62,   63,  163,  164,  163,
     164,  125,  145,  127,  228,  202,  203,   85,  184,  145,  145,  145,   80,  145,  145,  145,
      97,  184,  145,  105,  145,  102,  145,   91,  116,  117,  118,  163,  164,  163,  164,  163,
     164,  163,  164,  145,  163,  164,  163,  164,  163,  164,  145,  145,  145,  145,  145,  145,
     145,  184,  145,  229,  145,  163,  164,  231,  145,  145,   52,  201,  163,  164,  163,  164,
     163,  164,  163,  164,  163,  164,  163,  164,  145,  233,  163,  164,  145,  208,  182,  145,
     178,  145,   76,  145,   28,  145,  157,  158,  145,  154,  163,  164,  145,  145,  163,  164,
     145,  163,  164,  163,  164,  163,  164,  163,  164,  145,  163,  164,  145,  145,  163,  164,
     145,   51,  163,  164,  145,  122,  145,  124,  208,  145,  187,  163,  164,  145,  163,  164,
     145,  229,  145,  145,  145,  154,  163,  164,  163,  164,  145,  163,  164,  145,    7,  163,
     164,  145,  163,  164,  163,  164,  163,  164,  145,   97,    7,  145,  163,  164,  102,  163,
     164,  202,  203,  163,  164,  219,  187,   16,  222,  154,  163,  164,  208,  163,  164,  208,
     114,  154,   48,  154,  154,   51,  109,  110,   47,   52,   49,   48,   53,   48,   51,   48,
      51,   48,   51,   36,   51,  116,   47,  118,   53,   48,  187,   48,   51,   47,   51,   79,
      80,   76,  187,   48,  187,  187,   51,   48,   52,   48,   51,  116,   51,  118,   48,   52,
     145,   51,  225,  145,  145,  145,  145,  145,  145,  145,  145,  145,  145,  145,  145,  145,
      76,  145,  145,  145,  145,  145,  201,   76,  201,  188,  192,   92,  189,  205,  205,  175,
     192,  230,  230,  205,  218,  103,  167,  191,  189,  148,  134,  232,  166,   47,  166,  166,
     171,    5,  114,   45,  211,  227,  122,  129,   45,  226,  211,   47,  150,   86,  180,  168,
     150,  168,  150,  183,  183,  183,  183,  180,  180,   64,  150,  192,  173,  165,   85,  107,
     192,  192,   86,  165,   47,  165,  122,   32,  108,  113,  168,  112,  167,  165,  111,  165,
      50,  207,   51,   40,  206,   35,  165,  165,  152,  207,  173,  206,  153,  207,  168,  206,
     146,  217,  207,  215,  168,  146,  144,  220,   36,  144,  144,  156,  156,  144,  169,  143,
     169,  156,    4,    3,   56,   42,   73,   43,   86,   48,   48,  103,  101,  115,  196,   90,
     195,  194,  193,  206,  192,  104,   86,   46,  128,   51,  131,  128,   86,    1,  130,   16,
     104,   16,   16,  115,  220,   16,   53,   90,  106,    1,  103,   34,   47,   86,  125,   46,
      49,    7,   84,   91,   47,   67,   47,   47,   67,   55,   48,   47,   47,   67,   48,   47,
      61,   97,    1,   48,   48,    0,  103,   48,   47,   51,   48,   51,  106,   48,   47,  106,
      53,  105,   48,   51,   51,  106,   48,   48,   51,   48,   38,   48,   47,   49,   48,   47,
     103,   48,   51,   49,   47,   42,   48,   47,  234,   48,   48,   47,  234,  103,   48,  234,
     234,  234,  103,  234,  234,  234,  234,  234,  234,  234,  234,  234,  234,  234,  234,  234,
     234,  234,  234,  234,  234,  103,
];

#[rustfmt::skip]
static SHIFT_OFFSET: [i16; 423] = [
      132,   568,   580,   751,   697,   697,   697,   697,   241,    -5,    72,    72,
      697,   697,   697,   697,   697,   697,   697,   814,   814,   547,   621,   191,
      396,   100,   130,   179,   228,   277,   326,   375,   403,   431,   459,   459,
      459,   459,   459,   459,   459,   459,   459,   459,   459,   459,   459,   459,
      459,   527,   459,   554,   492,   492,   685,   697,   697,   697,   697,   697,
      697,   697,   697,   697,   697,   697,   697,   697,   697,   697,   697,   697,
      697,   697,   697,   697,   697,   697,   697,   697,   697,   697,   802,   697,
      697,   697,   697,   697,   697,   697,   697,   697,   697,   697,   697,   697,
       11,    31,    31,    31,    31,    31,   190,    38,    44,   687,   634,   153,
      153,   687,    14,   488,    20,  1462,  1462,  1462,   585,   585,   585,   774,
      774,   308,   308,   723,   687,   687,   687,   687,   687,   687,   687,   687,
      687,   687,   687,   687,   687,   687,   687,   687,   832,   687,   687,   687,
      687,    93,   982,   982,   488,   -14,   -14,   -14,   -14,   -14,   -14,  1462,
     1462,   884,   150,   150,   784,   234,   630,   786,   767,   804,   821,   687,
      687,   687,   687,   687,   687,   687,   687,   687,   687,   687,   687,   687,
      687,   687,   687,   306,   306,   306,   687,   687,   890,   687,   687,   687,
      708,   687,   909,   687,   687,   687,   687,   687,   687,   687,   687,   687,
      687,   405,   166,   641,   641,   641,   651,   854,  1032,  1038,  1111,  1111,
     1123,  1038,  1123,   898,  1106,     7,  1049,  1111,   971,  1049,  1049,   444,
      895,  1113,  1108,  1198,  1244,  1136,  1206,  1206,  1206,  1206,  1132,  1126,
     1211,  1136,  1198,  1244,  1244,  1136,  1211,  1212,  1211,  1211,  1212,  1175,
     1175,  1175,  1209,  1212,  1175,  1193,  1175,  1209,  1175,  1175,  1172,  1196,
     1172,  1196,  1172,  1196,  1172,  1196,  1237,  1164,  1212,  1255,  1255,  1212,
     1176,  1180,  1179,  1183,  1136,  1246,  1247,  1259,  1259,  1266,  1266,  1266,
     1266,  1284,  1462,  1462,  1462,  1462,  1462,   518,   852,   591,   558,  1127,
     1115,  1117,  1119,  1121,  1129,  1131,  1109,  1104,  1135,   908,  1139,  1143,
     1140,  1145,  1057,  1079,  1150,  1147,  1134,  1326,  1328,  1276,  1291,  1261,
     1292,  1250,  1289,  1290,  1236,  1239,  1226,  1253,  1245,  1264,  1305,  1224,
     1302,  1227,  1223,  1228,  1270,  1356,  1256,  1248,  1343,  1345,  1346,  1349,
     1277,  1313,  1262,  1267,  1368,  1337,  1325,  1287,  1249,  1327,  1329,  1370,
     1288,  1294,  1333,  1314,  1335,  1336,  1338,  1340,  1317,  1330,  1341,  1322,
     1331,  1342,  1347,  1348,  1350,  1296,  1344,  1351,  1353,  1352,  1295,  1354,
     1357,  1355,  1298,  1359,  1304,  1360,  1301,  1361,  1307,  1362,  1360,  1366,
     1367,  1369,  1365,  1371,  1373,  1380,  1374,  1376,  1372,  1375,  1377,  1381,
     1378,  1375,  1382,  1384,  1385,  1386,  1388,  1321,  1334,  1339,  1358,  1390,
     1387,  1393,  1397,
];

#[rustfmt::skip]
static REDUCE_OFFSET: [i16; 295] = [
       26,   448,   507,   123,   571,   582,   584,   588,   449,   -38,   107,   147,
      445,   633,   648,   689,   701,   749,   510,   744,   747,   770,   465,   752,
      779,   -43,   -43,   -43,   -43,   -43,   -43,   -43,   -43,   -43,   -43,   -43,
      -43,   -43,   -43,   -43,   -43,   -43,   -43,   -43,   -43,   -43,   -43,   -43,
      -43,   -43,   -43,   -43,   -43,   -43,   771,   806,   810,   812,   840,   842,
      844,   846,   849,   851,   853,   866,   873,   875,   877,   879,   881,   883,
      887,   903,   907,   910,   912,   914,   916,   919,   923,   927,   936,   939,
      947,   949,   952,   956,   959,   961,   963,   969,   972,   976,   983,   986,
      -43,   -43,   -43,   -43,   -43,   -43,   -43,   -43,   -43,   800,   194,   163,
      208,    22,   -43,    77,   -43,   -43,   -43,   -43,   434,   434,   434,   486,
      613,   437,   457,   508,   653,   569,   623,   740,   756,   758,   772,   809,
      622,   841,   368,   845,   798,   888,   940,   876,   922,   136,   943,   816,
      878,   742,   712,   905,   661,   911,   955,   991,   999,  1001,  1002,   935,
      642,    37,    69,    86,   173,    99,   218,   230,   279,   307,   446,   536,
      574,   597,   627,   649,   679,   743,   783,   833,   874,   924,   962,  1058,
     1059,  1060,  1061,   126,   207,   353,  1062,  1063,   -21,  1064,  1065,  1066,
      535,  1067,   872,  1055,  1068,  1069,   218,  1070,  1072,  1073,  1074,  1075,
     1076,   977,   555,   834,  1021,  1023,   -21,  1037,  1039,  1034,  1024,  1025,
     1003,  1040,  1004,  1071,  1056,  1077,  1078,  1030,  1018,  1080,  1081,  1048,
     1051,  1093,  1011,  1041,  1082,  1083,  1084,  1085,  1086,  1087,  1026,  1031,
     1110,  1088,  1047,  1091,  1092,  1089,  1114,  1095,  1116,  1124,  1097,  1112,
     1118,  1120,  1103,  1122,  1128,  1125,  1130,  1133,  1137,  1138,  1090,  1094,
     1098,  1101,  1102,  1105,  1107,  1141,  1100,  1096,  1142,  1099,  1144,  1148,
     1146,  1149,  1151,  1153,  1156,  1155,  1152,  1166,  1171,  1174,  1177,  1178,
     1181,  1184,  1167,  1168,  1157,  1159,  1173,
];

#[rustfmt::skip]
static DEFAULT_ACTION: [u16; 423] = [
     1187,  1181,  1181,  1181,  1124,  1124,  1124,  1124,  1181,  1019,  1046,  1046,
     1229,  1229,  1229,  1229,  1229,  1229,  1123,  1229,  1229,  1229,  1229,  1181,
     1023,  1052,  1229,  1229,  1229,  1125,  1126,  1229,  1229,  1229,  1157,  1062,
     1061,  1060,  1059,  1033,  1057,  1050,  1054,  1125,  1119,  1120,  1118,  1122,
     1126,  1229,  1053,  1088,  1103,  1087,  1229,  1229,  1229,  1229,  1229,  1229,
     1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,
     1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,
     1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,
     1097,  1102,  1109,  1101,  1098,  1090,  1089,  1091,  1092,  1229,   990,  1229,
     1229,  1229,  1093,  1229,  1094,  1106,  1105,  1104,  1179,  1196,  1195,  1229,
     1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,
     1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1131,  1229,  1229,  1229,
     1229,  1181,   948,   948,  1229,  1181,  1181,  1181,  1181,  1181,  1181,  1023,
     1014,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,
     1176,  1229,  1173,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,
     1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,
     1019,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,
     1190,  1229,  1152,  1019,  1019,  1019,  1021,  1003,  1013,  1056,  1035,  1035,
     1226,  1056,  1226,   965,  1208,   962,  1046,  1035,  1121,  1046,  1046,  1020,
     1013,  1229,  1227,  1067,   993,  1056,   999,   999,   999,   999,  1156,  1223,
      939,  1056,  1067,   993,   993,  1056,   939,  1132,   939,   939,  1132,   991,
      991,   991,   980,  1132,   991,   965,   991,   980,   991,   991,  1039,  1034,
     1039,  1034,  1039,  1034,  1039,  1034,  1127,  1229,  1132,  1136,  1136,  1132,
     1051,  1040,  1049,  1047,  1056,   943,   983,  1193,  1193,  1189,  1189,  1189,
     1189,   929,  1203,  1203,   967,   967,  1203,  1229,  1229,  1229,  1198,  1139,
     1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,
     1229,  1229,  1229,  1229,  1229,  1229,  1073,  1229,   926,  1229,  1229,  1180,
     1229,  1174,  1229,  1229,  1218,  1229,  1229,  1229,  1229,  1229,  1229,  1229,
     1155,  1154,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,
     1229,  1229,  1229,  1225,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,
     1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,
     1229,  1229,  1229,  1229,  1229,  1005,  1229,  1229,  1229,  1212,  1229,  1229,
     1229,  1229,  1229,  1229,  1229,  1048,  1229,  1041,  1229,  1229,  1216,  1229,
     1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1229,  1183,  1229,  1229,
     1229,  1182,  1229,  1229,  1229,  1229,  1229,  1075,  1229,  1074,  1078,  1229,
      933,  1229,  1229,
];

#[rustfmt::skip]
static FALLBACK: [u8; 75] = [
       0,    0,    0,   52,   52,    0,    0,    0,    0,   52,    0,    0,    0,   52,   52,    0,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    0,    0,   52,    0,   52,    0,    0,   52,    0,    0,    0,   52,    0,    0,
       0,    0,    0,    0,    0,   52,   52,   52,   52,   52,   52,   52,   52,   52,   52,   52,
      52,   52,   52,   52,   52,   52,   52,   52,   52,   52,   52,
];

#[rustfmt::skip]
static RULES: [RuleInfo; 305] = [
    RuleInfo::new(139, 3), // 0
    RuleInfo::new(139, 1), // 1
    RuleInfo::new(140, 1), // 2
    RuleInfo::new(140, 3), // 3
    RuleInfo::new(142, 3), // 4
    RuleInfo::new(143, 0), // 5
    RuleInfo::new(143, 1), // 6
    RuleInfo::new(142, 2), // 7
    RuleInfo::new(142, 2), // 8
    RuleInfo::new(142, 2), // 9
    RuleInfo::new(142, 2), // 10
    RuleInfo::new(142, 3), // 11
    RuleInfo::new(142, 5), // 12
    RuleInfo::new(147, 4), // 13
    RuleInfo::new(149, 1), // 14
    RuleInfo::new(150, 0), // 15
    RuleInfo::new(150, 3), // 16
    RuleInfo::new(148, 5), // 17
    RuleInfo::new(148, 2), // 18
    RuleInfo::new(153, 0), // 19
    RuleInfo::new(153, 2), // 20
    RuleInfo::new(155, 2), // 21
    RuleInfo::new(145, 1), // 22
    RuleInfo::new(145, 1), // 23
    RuleInfo::new(157, 0), // 24
    RuleInfo::new(157, 4), // 25
    RuleInfo::new(157, 6), // 26
    RuleInfo::new(158, 2), // 27
    RuleInfo::new(162, 2), // 28
    RuleInfo::new(162, 2), // 29
    RuleInfo::new(162, 4), // 30
    RuleInfo::new(162, 3), // 31
    RuleInfo::new(162, 3), // 32
    RuleInfo::new(162, 2), // 33
    RuleInfo::new(162, 3), // 34
    RuleInfo::new(162, 5), // 35
    RuleInfo::new(162, 2), // 36
    RuleInfo::new(162, 4), // 37
    RuleInfo::new(162, 4), // 38
    RuleInfo::new(162, 1), // 39
    RuleInfo::new(162, 2), // 40
    RuleInfo::new(167, 0), // 41
    RuleInfo::new(167, 1), // 42
    RuleInfo::new(169, 0), // 43
    RuleInfo::new(169, 2), // 44
    RuleInfo::new(171, 2), // 45
    RuleInfo::new(171, 3), // 46
    RuleInfo::new(171, 3), // 47
    RuleInfo::new(171, 3), // 48
    RuleInfo::new(172, 2), // 49
    RuleInfo::new(172, 2), // 50
    RuleInfo::new(172, 1), // 51
    RuleInfo::new(172, 1), // 52
    RuleInfo::new(172, 2), // 53
    RuleInfo::new(170, 3), // 54
    RuleInfo::new(170, 2), // 55
    RuleInfo::new(173, 0), // 56
    RuleInfo::new(173, 2), // 57
    RuleInfo::new(173, 2), // 58
    RuleInfo::new(152, 0), // 59
    RuleInfo::new(175, 1), // 60
    RuleInfo::new(176, 2), // 61
    RuleInfo::new(176, 7), // 62
    RuleInfo::new(176, 5), // 63
    RuleInfo::new(176, 5), // 64
    RuleInfo::new(176, 10), // 65
    RuleInfo::new(179, 0), // 66
    RuleInfo::new(165, 0), // 67
    RuleInfo::new(165, 3), // 68
    RuleInfo::new(180, 0), // 69
    RuleInfo::new(180, 2), // 70
    RuleInfo::new(181, 1), // 71
    RuleInfo::new(181, 1), // 72
    RuleInfo::new(142, 4), // 73
    RuleInfo::new(183, 2), // 74
    RuleInfo::new(183, 0), // 75
    RuleInfo::new(142, 7), // 76
    RuleInfo::new(142, 4), // 77
    RuleInfo::new(142, 1), // 78
    RuleInfo::new(154, 2), // 79
    RuleInfo::new(185, 3), // 80
    RuleInfo::new(188, 1), // 81
    RuleInfo::new(188, 2), // 82
    RuleInfo::new(188, 1), // 83
    RuleInfo::new(186, 9), // 84
    RuleInfo::new(197, 4), // 85
    RuleInfo::new(197, 5), // 86
    RuleInfo::new(189, 1), // 87
    RuleInfo::new(189, 1), // 88
    RuleInfo::new(189, 0), // 89
    RuleInfo::new(200, 0), // 90
    RuleInfo::new(190, 3), // 91
    RuleInfo::new(190, 2), // 92
    RuleInfo::new(190, 4), // 93
    RuleInfo::new(201, 2), // 94
    RuleInfo::new(201, 0), // 95
    RuleInfo::new(191, 0), // 96
    RuleInfo::new(191, 2), // 97
    RuleInfo::new(203, 2), // 98
    RuleInfo::new(203, 0), // 99
    RuleInfo::new(202, 6), // 100
    RuleInfo::new(202, 8), // 101
    RuleInfo::new(202, 7), // 102
    RuleInfo::new(202, 7), // 103
    RuleInfo::new(184, 1), // 104
    RuleInfo::new(204, 1), // 105
    RuleInfo::new(204, 2), // 106
    RuleInfo::new(204, 3), // 107
    RuleInfo::new(204, 4), // 108
    RuleInfo::new(206, 2), // 109
    RuleInfo::new(206, 0), // 110
    RuleInfo::new(205, 0), // 111
    RuleInfo::new(205, 3), // 112
    RuleInfo::new(205, 2), // 113
    RuleInfo::new(207, 4), // 114
    RuleInfo::new(207, 0), // 115
    RuleInfo::new(195, 0), // 116
    RuleInfo::new(195, 3), // 117
    RuleInfo::new(177, 4), // 118
    RuleInfo::new(177, 2), // 119
    RuleInfo::new(166, 1), // 120
    RuleInfo::new(166, 1), // 121
    RuleInfo::new(166, 0), // 122
    RuleInfo::new(193, 0), // 123
    RuleInfo::new(193, 3), // 124
    RuleInfo::new(194, 0), // 125
    RuleInfo::new(194, 2), // 126
    RuleInfo::new(196, 0), // 127
    RuleInfo::new(196, 2), // 128
    RuleInfo::new(196, 4), // 129
    RuleInfo::new(196, 4), // 130
    RuleInfo::new(142, 6), // 131
    RuleInfo::new(192, 0), // 132
    RuleInfo::new(192, 2), // 133
    RuleInfo::new(142, 8), // 134
    RuleInfo::new(209, 5), // 135
    RuleInfo::new(209, 7), // 136
    RuleInfo::new(209, 3), // 137
    RuleInfo::new(209, 5), // 138
    RuleInfo::new(142, 6), // 139
    RuleInfo::new(142, 7), // 140
    RuleInfo::new(210, 2), // 141
    RuleInfo::new(210, 1), // 142
    RuleInfo::new(211, 0), // 143
    RuleInfo::new(211, 3), // 144
    RuleInfo::new(208, 3), // 145
    RuleInfo::new(208, 1), // 146
    RuleInfo::new(164, 3), // 147
    RuleInfo::new(163, 1), // 148
    RuleInfo::new(164, 1), // 149
    RuleInfo::new(164, 1), // 150
    RuleInfo::new(164, 3), // 151
    RuleInfo::new(164, 5), // 152
    RuleInfo::new(163, 1), // 153
    RuleInfo::new(163, 1), // 154
    RuleInfo::new(163, 1), // 155
    RuleInfo::new(164, 1), // 156
    RuleInfo::new(164, 3), // 157
    RuleInfo::new(164, 6), // 158
    RuleInfo::new(164, 5), // 159
    RuleInfo::new(164, 4), // 160
    RuleInfo::new(163, 1), // 161
    RuleInfo::new(164, 5), // 162
    RuleInfo::new(164, 3), // 163
    RuleInfo::new(164, 3), // 164
    RuleInfo::new(164, 3), // 165
    RuleInfo::new(164, 3), // 166
    RuleInfo::new(164, 3), // 167
    RuleInfo::new(164, 3), // 168
    RuleInfo::new(164, 3), // 169
    RuleInfo::new(164, 3), // 170
    RuleInfo::new(212, 1), // 171
    RuleInfo::new(212, 2), // 172
    RuleInfo::new(164, 3), // 173
    RuleInfo::new(164, 5), // 174
    RuleInfo::new(164, 2), // 175
    RuleInfo::new(164, 3), // 176
    RuleInfo::new(164, 3), // 177
    RuleInfo::new(164, 4), // 178
    RuleInfo::new(164, 2), // 179
    RuleInfo::new(164, 2), // 180
    RuleInfo::new(164, 2), // 181
    RuleInfo::new(164, 2), // 182
    RuleInfo::new(213, 1), // 183
    RuleInfo::new(213, 2), // 184
    RuleInfo::new(164, 5), // 185
    RuleInfo::new(214, 1), // 186
    RuleInfo::new(214, 2), // 187
    RuleInfo::new(164, 5), // 188
    RuleInfo::new(164, 3), // 189
    RuleInfo::new(164, 5), // 190
    RuleInfo::new(164, 4), // 191
    RuleInfo::new(164, 4), // 192
    RuleInfo::new(164, 5), // 193
    RuleInfo::new(217, 5), // 194
    RuleInfo::new(217, 4), // 195
    RuleInfo::new(218, 2), // 196
    RuleInfo::new(218, 0), // 197
    RuleInfo::new(216, 1), // 198
    RuleInfo::new(216, 0), // 199
    RuleInfo::new(199, 0), // 200
    RuleInfo::new(198, 3), // 201
    RuleInfo::new(198, 1), // 202
    RuleInfo::new(215, 0), // 203
    RuleInfo::new(215, 3), // 204
    RuleInfo::new(142, 11), // 205
    RuleInfo::new(219, 1), // 206
    RuleInfo::new(219, 0), // 207
    RuleInfo::new(168, 0), // 208
    RuleInfo::new(168, 3), // 209
    RuleInfo::new(178, 5), // 210
    RuleInfo::new(178, 3), // 211
    RuleInfo::new(220, 0), // 212
    RuleInfo::new(220, 2), // 213
    RuleInfo::new(142, 6), // 214
    RuleInfo::new(142, 2), // 215
    RuleInfo::new(142, 4), // 216
    RuleInfo::new(142, 5), // 217
    RuleInfo::new(142, 4), // 218
    RuleInfo::new(142, 5), // 219
    RuleInfo::new(142, 6), // 220
    RuleInfo::new(160, 2), // 221
    RuleInfo::new(161, 2), // 222
    RuleInfo::new(142, 5), // 223
    RuleInfo::new(222, 9), // 224
    RuleInfo::new(224, 1), // 225
    RuleInfo::new(224, 1), // 226
    RuleInfo::new(224, 2), // 227
    RuleInfo::new(224, 0), // 228
    RuleInfo::new(225, 1), // 229
    RuleInfo::new(225, 1), // 230
    RuleInfo::new(225, 3), // 231
    RuleInfo::new(227, 0), // 232
    RuleInfo::new(227, 2), // 233
    RuleInfo::new(223, 3), // 234
    RuleInfo::new(223, 2), // 235
    RuleInfo::new(229, 3), // 236
    RuleInfo::new(230, 3), // 237
    RuleInfo::new(230, 2), // 238
    RuleInfo::new(228, 7), // 239
    RuleInfo::new(228, 5), // 240
    RuleInfo::new(228, 5), // 241
    RuleInfo::new(228, 1), // 242
    RuleInfo::new(164, 4), // 243
    RuleInfo::new(164, 6), // 244
    RuleInfo::new(182, 1), // 245
    RuleInfo::new(182, 1), // 246
    RuleInfo::new(182, 1), // 247
    RuleInfo::new(142, 4), // 248
    RuleInfo::new(142, 1), // 249
    RuleInfo::new(142, 2), // 250
    RuleInfo::new(142, 4), // 251
    RuleInfo::new(142, 1), // 252
    RuleInfo::new(142, 2), // 253
    RuleInfo::new(142, 6), // 254
    RuleInfo::new(142, 7), // 255
    RuleInfo::new(231, 1), // 256
    RuleInfo::new(187, 0), // 257
    RuleInfo::new(187, 2), // 258
    RuleInfo::new(187, 3), // 259
    RuleInfo::new(233, 6), // 260
    RuleInfo::new(233, 8), // 261
    RuleInfo::new(138, 1), // 262
    RuleInfo::new(140, 0), // 263
    RuleInfo::new(141, 1), // 264
    RuleInfo::new(144, 0), // 265
    RuleInfo::new(144, 1), // 266
    RuleInfo::new(144, 2), // 267
    RuleInfo::new(146, 1), // 268
    RuleInfo::new(146, 0), // 269
    RuleInfo::new(142, 2), // 270
    RuleInfo::new(151, 4), // 271
    RuleInfo::new(151, 2), // 272
    RuleInfo::new(145, 1), // 273
    RuleInfo::new(157, 1), // 274
    RuleInfo::new(158, 1), // 275
    RuleInfo::new(159, 1), // 276
    RuleInfo::new(159, 1), // 277
    RuleInfo::new(156, 2), // 278
    RuleInfo::new(156, 0), // 279
    RuleInfo::new(162, 2), // 280
    RuleInfo::new(152, 2), // 281
    RuleInfo::new(174, 3), // 282
    RuleInfo::new(174, 1), // 283
    RuleInfo::new(175, 0), // 284
    RuleInfo::new(179, 1), // 285
    RuleInfo::new(181, 1), // 286
    RuleInfo::new(185, 1), // 287
    RuleInfo::new(186, 1), // 288
    RuleInfo::new(200, 2), // 289
    RuleInfo::new(201, 1), // 290
    RuleInfo::new(164, 1), // 291
    RuleInfo::new(199, 1), // 292
    RuleInfo::new(221, 1), // 293
    RuleInfo::new(221, 1), // 294
    RuleInfo::new(221, 1), // 295
    RuleInfo::new(221, 1), // 296
    RuleInfo::new(221, 1), // 297
    RuleInfo::new(160, 1), // 298
    RuleInfo::new(226, 0), // 299
    RuleInfo::new(226, 3), // 300
    RuleInfo::new(229, 1), // 301
    RuleInfo::new(230, 0), // 302
    RuleInfo::new(232, 0), // 303
    RuleInfo::new(232, 1), // 304
];

static SYMBOL_NAMES: [&str; 234] = [
    "$", "SEMI", "EXPLAIN", "QUERY", "PLAN", "OR",
    "AND", "NOT", "IS", "MATCH", "LIKE_KW", "BETWEEN",
    "IN", "ISNULL", "NOTNULL", "NE", "EQ", "GT",
    "LE", "LT", "GE", "ESCAPE", "BITAND", "BITOR",
    "LSHIFT", "RSHIFT", "PLUS", "MINUS", "STAR", "SLASH",
    "REM", "CONCAT", "COLLATE", "BITNOT", "BEGIN", "TRANSACTION",
    "DEFERRED", "COMMIT", "END", "ROLLBACK", "SAVEPOINT", "RELEASE",
    "TO", "TABLE", "CREATE", "IF", "EXISTS", "LP",
    "RP", "AS", "WITHOUT", "COMMA", "ID", "INDEXED",
    "ABORT", "ACTION", "ADD", "AFTER", "AUTOINCREMENT", "BEFORE",
    "CASCADE", "CONFLICT", "FAIL", "IGNORE", "INITIALLY", "INSTEAD",
    "NO", "KEY", "OFFSET", "RAISE", "REPLACE", "RESTRICT",
    "REINDEX", "RENAME", "CTIME_KW", "ANY", "STRING", "JOIN_KW",
    "CONSTRAINT", "DEFAULT", "NULL", "PRIMARY", "UNIQUE", "CHECK",
    "REFERENCES", "AUTOINCR", "ON", "INSERT", "DELETE", "UPDATE",
    "SET", "DEFERRABLE", "IMMEDIATE", "FOREIGN", "DROP", "VIEW",
    "UNION", "ALL", "EXCEPT", "INTERSECT", "SELECT", "VALUES",
    "DISTINCT", "DOT", "FROM", "JOIN", "BY", "USING",
    "ORDER", "ASC", "DESC", "GROUP", "HAVING", "LIMIT",
    "WHERE", "INTO", "FLOAT", "BLOB", "INTEGER", "VARIABLE",
    "CAST", "CASE", "WHEN", "THEN", "ELSE", "INDEX",
    "PRAGMA", "TRIGGER", "OF", "FOR", "EACH", "ROW",
    "ANALYZE", "ALTER", "COLUMNKW", "WITH", "RECURSIVE", "error",
    "input", "ecmd", "explain", "cmdx", "cmd", "transtype",
    "trans_opt", "nm", "savepoint_opt", "create_table", "create_table_args", "createkw",
    "ifnotexists", "columnlist", "conslist_opt", "table_options", "select", "columnname",
    "carglist", "typetoken", "typename", "signed", "plus_num", "minus_num",
    "ccons", "term", "expr", "onconf", "sortorder", "autoinc",
    "eidlist_opt", "refargs", "defer_subclause", "refarg", "refact", "init_deferred_pred_opt",
    "conslist", "tconscomma", "tcons", "sortlist", "eidlist", "defer_subclause_opt",
    "orconf", "resolvetype", "raisetype", "ifexists", "fullname", "selectnowith",
    "oneselect", "with", "multiselect_op", "distinct", "selcollist", "from",
    "where_opt", "groupby_opt", "having_opt", "orderby_opt", "limit_opt", "values",
    "nexprlist", "exprlist", "sclp", "as", "seltablist", "stl_prefix",
    "joinop", "indexed_opt", "on_opt", "using_opt", "idlist", "setlist",
    "insert_cmd", "idlist_opt", "likeop", "between_op", "in_op", "paren_exprlist",
    "case_operand", "case_exprlist", "case_else", "uniqueflag", "collate", "nmnum",
    "trigger_decl", "trigger_cmd_list", "trigger_time", "trigger_event", "foreach_clause", "when_clause",
    "trigger_cmd", "trnm", "tridxby", "add_column_fullname", "kwcolumn_opt", "wqlist",
];

static RULE_NAMES: [&str; 305] = [
    "ecmd ::= explain cmdx SEMI",
    "ecmd ::= SEMI",
    "explain ::= EXPLAIN",
    "explain ::= EXPLAIN QUERY PLAN",
    "cmd ::= BEGIN transtype trans_opt",
    "transtype ::=",
    "transtype ::= DEFERRED",
    "cmd ::= COMMIT trans_opt",
    "cmd ::= END trans_opt",
    "cmd ::= ROLLBACK trans_opt",
    "cmd ::= SAVEPOINT nm",
    "cmd ::= RELEASE savepoint_opt nm",
    "cmd ::= ROLLBACK trans_opt TO savepoint_opt nm",
    "create_table ::= createkw TABLE ifnotexists nm",
    "createkw ::= CREATE",
    "ifnotexists ::=",
    "ifnotexists ::= IF NOT EXISTS",
    "create_table_args ::= LP columnlist conslist_opt RP table_options",
    "create_table_args ::= AS select",
    "table_options ::=",
    "table_options ::= WITHOUT nm",
    "columnname ::= nm typetoken",
    "nm ::= ID|INDEXED",
    "nm ::= STRING",
    "typetoken ::=",
    "typetoken ::= typename LP signed RP",
    "typetoken ::= typename LP signed COMMA signed RP",
    "typename ::= typename ID|STRING",
    "ccons ::= CONSTRAINT nm",
    "ccons ::= DEFAULT term",
    "ccons ::= DEFAULT LP expr RP",
    "ccons ::= DEFAULT PLUS term",
    "ccons ::= DEFAULT MINUS term",
    "ccons ::= DEFAULT ID|INDEXED",
    "ccons ::= NOT NULL onconf",
    "ccons ::= PRIMARY KEY sortorder onconf autoinc",
    "ccons ::= UNIQUE onconf",
    "ccons ::= CHECK LP expr RP",
    "ccons ::= REFERENCES nm eidlist_opt refargs",
    "ccons ::= defer_subclause",
    "ccons ::= COLLATE ID|STRING",
    "autoinc ::=",
    "autoinc ::= AUTOINCR",
    "refargs ::=",
    "refargs ::= refargs refarg",
    "refarg ::= MATCH nm",
    "refarg ::= ON INSERT refact",
    "refarg ::= ON DELETE refact",
    "refarg ::= ON UPDATE refact",
    "refact ::= SET NULL",
    "refact ::= SET DEFAULT",
    "refact ::= CASCADE",
    "refact ::= RESTRICT",
    "refact ::= NO ACTION",
    "defer_subclause ::= NOT DEFERRABLE init_deferred_pred_opt",
    "defer_subclause ::= DEFERRABLE init_deferred_pred_opt",
    "init_deferred_pred_opt ::=",
    "init_deferred_pred_opt ::= INITIALLY DEFERRED",
    "init_deferred_pred_opt ::= INITIALLY IMMEDIATE",
    "conslist_opt ::=",
    "tconscomma ::= COMMA",
    "tcons ::= CONSTRAINT nm",
    "tcons ::= PRIMARY KEY LP sortlist autoinc RP onconf",
    "tcons ::= UNIQUE LP sortlist RP onconf",
    "tcons ::= CHECK LP expr RP onconf",
    "tcons ::= FOREIGN KEY LP eidlist RP REFERENCES nm eidlist_opt refargs defer_subclause_opt",
    "defer_subclause_opt ::=",
    "onconf ::=",
    "onconf ::= ON CONFLICT resolvetype",
    "orconf ::=",
    "orconf ::= OR resolvetype",
    "resolvetype ::= IGNORE",
    "resolvetype ::= REPLACE",
    "cmd ::= DROP TABLE ifexists fullname",
    "ifexists ::= IF EXISTS",
    "ifexists ::=",
    "cmd ::= createkw VIEW ifnotexists nm eidlist_opt AS select",
    "cmd ::= DROP VIEW ifexists fullname",
    "cmd ::= select",
    "select ::= with selectnowith",
    "selectnowith ::= selectnowith multiselect_op oneselect",
    "multiselect_op ::= UNION",
    "multiselect_op ::= UNION ALL",
    "multiselect_op ::= EXCEPT|INTERSECT",
    "oneselect ::= SELECT distinct selcollist from where_opt groupby_opt having_opt orderby_opt limit_opt",
    "values ::= VALUES LP nexprlist RP",
    "values ::= values COMMA LP exprlist RP",
    "distinct ::= DISTINCT",
    "distinct ::= ALL",
    "distinct ::=",
    "sclp ::=",
    "selcollist ::= sclp expr as",
    "selcollist ::= sclp STAR",
    "selcollist ::= sclp nm DOT STAR",
    "as ::= AS nm",
    "as ::=",
    "from ::=",
    "from ::= FROM seltablist",
    "stl_prefix ::= seltablist joinop",
    "stl_prefix ::=",
    "seltablist ::= stl_prefix nm as indexed_opt on_opt using_opt",
    "seltablist ::= stl_prefix nm LP exprlist RP as on_opt using_opt",
    "seltablist ::= stl_prefix LP select RP as on_opt using_opt",
    "seltablist ::= stl_prefix LP seltablist RP as on_opt using_opt",
    "fullname ::= nm",
    "joinop ::= COMMA|JOIN",
    "joinop ::= JOIN_KW JOIN",
    "joinop ::= JOIN_KW nm JOIN",
    "joinop ::= JOIN_KW nm nm JOIN",
    "on_opt ::= ON expr",
    "on_opt ::=",
    "indexed_opt ::=",
    "indexed_opt ::= INDEXED BY nm",
    "indexed_opt ::= NOT INDEXED",
    "using_opt ::= USING LP idlist RP",
    "using_opt ::=",
    "orderby_opt ::=",
    "orderby_opt ::= ORDER BY sortlist",
    "sortlist ::= sortlist COMMA expr sortorder",
    "sortlist ::= expr sortorder",
    "sortorder ::= ASC",
    "sortorder ::= DESC",
    "sortorder ::=",
    "groupby_opt ::=",
    "groupby_opt ::= GROUP BY nexprlist",
    "having_opt ::=",
    "having_opt ::= HAVING expr",
    "limit_opt ::=",
    "limit_opt ::= LIMIT expr",
    "limit_opt ::= LIMIT expr OFFSET expr",
    "limit_opt ::= LIMIT expr COMMA expr",
    "cmd ::= with DELETE FROM fullname indexed_opt where_opt",
    "where_opt ::=",
    "where_opt ::= WHERE expr",
    "cmd ::= with UPDATE orconf fullname indexed_opt SET setlist where_opt",
    "setlist ::= setlist COMMA nm EQ expr",
    "setlist ::= setlist COMMA LP idlist RP EQ expr",
    "setlist ::= nm EQ expr",
    "setlist ::= LP idlist RP EQ expr",
    "cmd ::= with insert_cmd INTO fullname idlist_opt select",
    "cmd ::= with insert_cmd INTO fullname idlist_opt DEFAULT VALUES",
    "insert_cmd ::= INSERT orconf",
    "insert_cmd ::= REPLACE",
    "idlist_opt ::=",
    "idlist_opt ::= LP idlist RP",
    "idlist ::= idlist COMMA nm",
    "idlist ::= nm",
    "expr ::= LP expr RP",
    "term ::= NULL",
    "expr ::= ID|INDEXED",
    "expr ::= JOIN_KW",
    "expr ::= nm DOT nm",
    "expr ::= nm DOT nm DOT nm",
    "term ::= FLOAT|BLOB",
    "term ::= STRING",
    "term ::= INTEGER",
    "expr ::= VARIABLE",
    "expr ::= expr COLLATE ID|STRING",
    "expr ::= CAST LP expr AS typetoken RP",
    "expr ::= ID|INDEXED LP distinct exprlist RP",
    "expr ::= ID|INDEXED LP STAR RP",
    "term ::= CTIME_KW",
    "expr ::= LP nexprlist COMMA expr RP",
    "expr ::= expr AND expr",
    "expr ::= expr OR expr",
    "expr ::= expr LT|GT|GE|LE expr",
    "expr ::= expr EQ|NE expr",
    "expr ::= expr BITAND|BITOR|LSHIFT|RSHIFT expr",
    "expr ::= expr PLUS|MINUS expr",
    "expr ::= expr STAR|SLASH|REM expr",
    "expr ::= expr CONCAT expr",
    "likeop ::= LIKE_KW|MATCH",
    "likeop ::= NOT LIKE_KW|MATCH",
    "expr ::= expr likeop expr",
    "expr ::= expr likeop expr ESCAPE expr",
    "expr ::= expr ISNULL|NOTNULL",
    "expr ::= expr NOT NULL",
    "expr ::= expr IS expr",
    "expr ::= expr IS NOT expr",
    "expr ::= NOT expr",
    "expr ::= BITNOT expr",
    "expr ::= MINUS expr",
    "expr ::= PLUS expr",
    "between_op ::= BETWEEN",
    "between_op ::= NOT BETWEEN",
    "expr ::= expr between_op expr AND expr",
    "in_op ::= IN",
    "in_op ::= NOT IN",
    "expr ::= expr in_op LP exprlist RP",
    "expr ::= LP select RP",
    "expr ::= expr in_op LP select RP",
    "expr ::= expr in_op nm paren_exprlist",
    "expr ::= EXISTS LP select RP",
    "expr ::= CASE case_operand case_exprlist case_else END",
    "case_exprlist ::= case_exprlist WHEN expr THEN expr",
    "case_exprlist ::= WHEN expr THEN expr",
    "case_else ::= ELSE expr",
    "case_else ::=",
    "case_operand ::= expr",
    "case_operand ::=",
    "exprlist ::=",
    "nexprlist ::= nexprlist COMMA expr",
    "nexprlist ::= expr",
    "paren_exprlist ::=",
    "paren_exprlist ::= LP exprlist RP",
    "cmd ::= createkw uniqueflag INDEX ifnotexists nm ON nm LP sortlist RP where_opt",
    "uniqueflag ::= UNIQUE",
    "uniqueflag ::=",
    "eidlist_opt ::=",
    "eidlist_opt ::= LP eidlist RP",
    "eidlist ::= eidlist COMMA nm collate sortorder",
    "eidlist ::= nm collate sortorder",
    "collate ::=",
    "collate ::= COLLATE ID|STRING",
    "cmd ::= DROP INDEX ifexists fullname ON nm",
    "cmd ::= PRAGMA nm",
    "cmd ::= PRAGMA nm EQ nmnum",
    "cmd ::= PRAGMA nm LP nmnum RP",
    "cmd ::= PRAGMA nm EQ minus_num",
    "cmd ::= PRAGMA nm LP minus_num RP",
    "cmd ::= PRAGMA nm EQ nm DOT nm",
    "plus_num ::= PLUS INTEGER|FLOAT",
    "minus_num ::= MINUS INTEGER|FLOAT",
    "cmd ::= createkw trigger_decl BEGIN trigger_cmd_list END",
    "trigger_decl ::= TRIGGER ifnotexists nm trigger_time trigger_event ON fullname foreach_clause when_clause",
    "trigger_time ::= BEFORE",
    "trigger_time ::= AFTER",
    "trigger_time ::= INSTEAD OF",
    "trigger_time ::=",
    "trigger_event ::= DELETE|INSERT",
    "trigger_event ::= UPDATE",
    "trigger_event ::= UPDATE OF idlist",
    "when_clause ::=",
    "when_clause ::= WHEN expr",
    "trigger_cmd_list ::= trigger_cmd_list trigger_cmd SEMI",
    "trigger_cmd_list ::= trigger_cmd SEMI",
    "trnm ::= nm DOT nm",
    "tridxby ::= INDEXED BY nm",
    "tridxby ::= NOT INDEXED",
    "trigger_cmd ::= UPDATE orconf trnm tridxby SET setlist where_opt",
    "trigger_cmd ::= insert_cmd INTO trnm idlist_opt select",
    "trigger_cmd ::= DELETE FROM trnm tridxby where_opt",
    "trigger_cmd ::= select",
    "expr ::= RAISE LP IGNORE RP",
    "expr ::= RAISE LP raisetype COMMA nm RP",
    "raisetype ::= ROLLBACK",
    "raisetype ::= ABORT",
    "raisetype ::= FAIL",
    "cmd ::= DROP TRIGGER ifexists fullname",
    "cmd ::= REINDEX",
    "cmd ::= REINDEX nm",
    "cmd ::= REINDEX nm ON nm",
    "cmd ::= ANALYZE",
    "cmd ::= ANALYZE nm",
    "cmd ::= ALTER TABLE fullname RENAME TO nm",
    "cmd ::= ALTER TABLE add_column_fullname ADD kwcolumn_opt columnname carglist",
    "add_column_fullname ::= fullname",
    "with ::=",
    "with ::= WITH wqlist",
    "with ::= WITH RECURSIVE wqlist",
    "wqlist ::= nm eidlist_opt AS LP select RP",
    "wqlist ::= wqlist COMMA nm eidlist_opt AS LP select RP",
    "input ::= ecmd",
    "explain ::=",
    "cmdx ::= cmd",
    "trans_opt ::=",
    "trans_opt ::= TRANSACTION",
    "trans_opt ::= TRANSACTION nm",
    "savepoint_opt ::= SAVEPOINT",
    "savepoint_opt ::=",
    "cmd ::= create_table create_table_args",
    "columnlist ::= columnlist COMMA columnname carglist",
    "columnlist ::= columnname carglist",
    "nm ::= JOIN_KW",
    "typetoken ::= typename",
    "typename ::= ID|STRING",
    "signed ::= plus_num",
    "signed ::= minus_num",
    "carglist ::= carglist ccons",
    "carglist ::=",
    "ccons ::= NULL onconf",
    "conslist_opt ::= COMMA conslist",
    "conslist ::= conslist tconscomma tcons",
    "conslist ::= tcons",
    "tconscomma ::=",
    "defer_subclause_opt ::= defer_subclause",
    "resolvetype ::= raisetype",
    "selectnowith ::= oneselect",
    "oneselect ::= values",
    "sclp ::= selcollist COMMA",
    "as ::= ID|STRING",
    "expr ::= term",
    "exprlist ::= nexprlist",
    "nmnum ::= plus_num",
    "nmnum ::= nm",
    "nmnum ::= ON",
    "nmnum ::= DELETE",
    "nmnum ::= DEFAULT",
    "plus_num ::= INTEGER|FLOAT",
    "foreach_clause ::=",
    "foreach_clause ::= FOR EACH ROW",
    "trnm ::= nm",
    "tridxby ::=",
    "kwcolumn_opt ::=",
    "kwcolumn_opt ::= COLUMNKW",
];
