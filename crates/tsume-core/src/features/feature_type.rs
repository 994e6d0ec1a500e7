//! 特徴量プレーンの種類

use crate::types::PieceType;

macro_rules! define_feature_types {
    ($($name:ident),* $(,)?) => {
        /// 特徴量プレーンの種類
        ///
        /// `My`/`Op` は手番側/相手側を表す。
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum FeatureType {
            $($name),*
        }

        impl FeatureType {
            /// 全種類（定義順）
            pub const ALL: &'static [FeatureType] = &[$(FeatureType::$name),*];
            pub const NUM: usize = Self::ALL.len();
        }
    };
}

define_feature_types! {
    Black, White,

    MyPawn, MyLance, MyKnight, MySilver, MyGold, MyKing, MyBishop, MyRook,
    MyProPawn, MyProLance, MyProKnight, MyProSilver, MyProBishop, MyProRook,
    MyBishopAndProBishop, MyRookAndProRook,

    OpPawn, OpLance, OpKnight, OpSilver, OpGold, OpKing, OpBishop, OpRook,
    OpProPawn, OpProLance, OpProKnight, OpProSilver, OpProBishop, OpProRook,
    OpBishopAndProBishop, OpRookAndProRook,

    MyStandPawn1, MyStandPawn2, MyStandPawn3, MyStandPawn4, MyStandPawn5,
    MyStandPawn6, MyStandPawn7, MyStandPawn8, MyStandPawn9,
    MyStandLance1, MyStandLance2, MyStandLance3, MyStandLance4,
    MyStandKnight1, MyStandKnight2, MyStandKnight3, MyStandKnight4,
    MyStandSilver1, MyStandSilver2, MyStandSilver3, MyStandSilver4,
    MyStandGold1, MyStandGold2, MyStandGold3, MyStandGold4,
    MyStandBishop1, MyStandBishop2,
    MyStandRook1, MyStandRook2,

    OpStandPawn1, OpStandPawn2, OpStandPawn3, OpStandPawn4, OpStandPawn5,
    OpStandPawn6, OpStandPawn7, OpStandPawn8, OpStandPawn9,
    OpStandLance1, OpStandLance2, OpStandLance3, OpStandLance4,
    OpStandKnight1, OpStandKnight2, OpStandKnight3, OpStandKnight4,
    OpStandSilver1, OpStandSilver2, OpStandSilver3, OpStandSilver4,
    OpStandGold1, OpStandGold2, OpStandGold3, OpStandGold4,
    OpStandBishop1, OpStandBishop2,
    OpStandRook1, OpStandRook2,

    Check, NoMyPawnFile, NoOpPawnFile,
}

/// プレーンの中身の決め方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PlaneSource {
    /// 手番が黒（true）/白（false）なら全升 1
    Turn { black: bool },
    /// 盤上の駒。`with_promoted` なら成駒も含める（角・飛のみ）
    Piece { mine: bool, pt: PieceType, with_promoted: bool },
    /// 手駒が `count` 枚以上なら全升 1
    Stand { mine: bool, pt: PieceType, count: u32 },
    /// 王手されていれば全升 1
    Check,
    /// 歩（成っていないもの）のない筋
    NoPawnFile { mine: bool },
}

impl FeatureType {
    pub(super) const fn source(self) -> PlaneSource {
        use FeatureType::*;
        use PieceType as P;

        const fn piece(mine: bool, pt: PieceType) -> PlaneSource {
            PlaneSource::Piece { mine, pt, with_promoted: false }
        }
        const fn stand(mine: bool, pt: PieceType, count: u32) -> PlaneSource {
            PlaneSource::Stand { mine, pt, count }
        }

        match self {
            Black => PlaneSource::Turn { black: true },
            White => PlaneSource::Turn { black: false },

            MyPawn => piece(true, P::Pawn),
            MyLance => piece(true, P::Lance),
            MyKnight => piece(true, P::Knight),
            MySilver => piece(true, P::Silver),
            MyGold => piece(true, P::Gold),
            MyKing => piece(true, P::King),
            MyBishop => piece(true, P::Bishop),
            MyRook => piece(true, P::Rook),
            MyProPawn => piece(true, P::ProPawn),
            MyProLance => piece(true, P::ProLance),
            MyProKnight => piece(true, P::ProKnight),
            MyProSilver => piece(true, P::ProSilver),
            MyProBishop => piece(true, P::Horse),
            MyProRook => piece(true, P::Dragon),
            MyBishopAndProBishop => {
                PlaneSource::Piece { mine: true, pt: P::Bishop, with_promoted: true }
            }
            MyRookAndProRook => PlaneSource::Piece { mine: true, pt: P::Rook, with_promoted: true },

            OpPawn => piece(false, P::Pawn),
            OpLance => piece(false, P::Lance),
            OpKnight => piece(false, P::Knight),
            OpSilver => piece(false, P::Silver),
            OpGold => piece(false, P::Gold),
            OpKing => piece(false, P::King),
            OpBishop => piece(false, P::Bishop),
            OpRook => piece(false, P::Rook),
            OpProPawn => piece(false, P::ProPawn),
            OpProLance => piece(false, P::ProLance),
            OpProKnight => piece(false, P::ProKnight),
            OpProSilver => piece(false, P::ProSilver),
            OpProBishop => piece(false, P::Horse),
            OpProRook => piece(false, P::Dragon),
            OpBishopAndProBishop => {
                PlaneSource::Piece { mine: false, pt: P::Bishop, with_promoted: true }
            }
            OpRookAndProRook => PlaneSource::Piece { mine: false, pt: P::Rook, with_promoted: true },

            MyStandPawn1 => stand(true, P::Pawn, 1),
            MyStandPawn2 => stand(true, P::Pawn, 2),
            MyStandPawn3 => stand(true, P::Pawn, 3),
            MyStandPawn4 => stand(true, P::Pawn, 4),
            MyStandPawn5 => stand(true, P::Pawn, 5),
            MyStandPawn6 => stand(true, P::Pawn, 6),
            MyStandPawn7 => stand(true, P::Pawn, 7),
            MyStandPawn8 => stand(true, P::Pawn, 8),
            MyStandPawn9 => stand(true, P::Pawn, 9),
            MyStandLance1 => stand(true, P::Lance, 1),
            MyStandLance2 => stand(true, P::Lance, 2),
            MyStandLance3 => stand(true, P::Lance, 3),
            MyStandLance4 => stand(true, P::Lance, 4),
            MyStandKnight1 => stand(true, P::Knight, 1),
            MyStandKnight2 => stand(true, P::Knight, 2),
            MyStandKnight3 => stand(true, P::Knight, 3),
            MyStandKnight4 => stand(true, P::Knight, 4),
            MyStandSilver1 => stand(true, P::Silver, 1),
            MyStandSilver2 => stand(true, P::Silver, 2),
            MyStandSilver3 => stand(true, P::Silver, 3),
            MyStandSilver4 => stand(true, P::Silver, 4),
            MyStandGold1 => stand(true, P::Gold, 1),
            MyStandGold2 => stand(true, P::Gold, 2),
            MyStandGold3 => stand(true, P::Gold, 3),
            MyStandGold4 => stand(true, P::Gold, 4),
            MyStandBishop1 => stand(true, P::Bishop, 1),
            MyStandBishop2 => stand(true, P::Bishop, 2),
            MyStandRook1 => stand(true, P::Rook, 1),
            MyStandRook2 => stand(true, P::Rook, 2),

            OpStandPawn1 => stand(false, P::Pawn, 1),
            OpStandPawn2 => stand(false, P::Pawn, 2),
            OpStandPawn3 => stand(false, P::Pawn, 3),
            OpStandPawn4 => stand(false, P::Pawn, 4),
            OpStandPawn5 => stand(false, P::Pawn, 5),
            OpStandPawn6 => stand(false, P::Pawn, 6),
            OpStandPawn7 => stand(false, P::Pawn, 7),
            OpStandPawn8 => stand(false, P::Pawn, 8),
            OpStandPawn9 => stand(false, P::Pawn, 9),
            OpStandLance1 => stand(false, P::Lance, 1),
            OpStandLance2 => stand(false, P::Lance, 2),
            OpStandLance3 => stand(false, P::Lance, 3),
            OpStandLance4 => stand(false, P::Lance, 4),
            OpStandKnight1 => stand(false, P::Knight, 1),
            OpStandKnight2 => stand(false, P::Knight, 2),
            OpStandKnight3 => stand(false, P::Knight, 3),
            OpStandKnight4 => stand(false, P::Knight, 4),
            OpStandSilver1 => stand(false, P::Silver, 1),
            OpStandSilver2 => stand(false, P::Silver, 2),
            OpStandSilver3 => stand(false, P::Silver, 3),
            OpStandSilver4 => stand(false, P::Silver, 4),
            OpStandGold1 => stand(false, P::Gold, 1),
            OpStandGold2 => stand(false, P::Gold, 2),
            OpStandGold3 => stand(false, P::Gold, 3),
            OpStandGold4 => stand(false, P::Gold, 4),
            OpStandBishop1 => stand(false, P::Bishop, 1),
            OpStandBishop2 => stand(false, P::Bishop, 2),
            OpStandRook1 => stand(false, P::Rook, 1),
            OpStandRook2 => stand(false, P::Rook, 2),

            Check => PlaneSource::Check,
            NoMyPawnFile => PlaneSource::NoPawnFile { mine: true },
            NoOpPawnFile => PlaneSource::NoPawnFile { mine: false },
        }
    }
}
